mod pet_progression;
mod streaks;
