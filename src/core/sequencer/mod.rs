/// Numbers consecutive sets of the same exercise within one workout.
///
/// Sets are keyed on the selected Garmin identifier. The order restarts at 1
/// whenever it changes, so two separate blocks of the same exercise in one
/// workout each start from 1.
#[derive(Debug, Default)]
pub struct SetSequencer {
    last_exercise: Option<String>,
    set_order: u32,
}

impl SetSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous exercise; call at the start of every workout.
    pub fn reset(&mut self) {
        self.last_exercise = None;
        self.set_order = 0;
    }

    /// Order of the next admitted set of `exercise`.
    pub fn next_order(&mut self, exercise: &str) -> u32 {
        if self.last_exercise.as_deref() == Some(exercise) {
            self.set_order += 1;
        } else {
            self.last_exercise = Some(exercise.to_string());
            self.set_order = 1;
        }
        self.set_order
    }
}
