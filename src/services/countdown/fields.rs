use crate::models::timer::{Hms, TimeField};

/// What the three duration fields show.
///
/// While `Displaying`, every field is derived from the unit's remaining
/// seconds. While `Editing`, the focused field shows its raw buffer and the
/// other two keep the values captured when editing began.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldEditState {
    #[default]
    Displaying,
    Editing {
        field: TimeField,
        raw: String,
        committed: Hms,
    },
}

impl FieldEditState {
    /// Start editing `field`, seeding the buffer with its padded value
    pub fn begin(current: Hms, field: TimeField) -> Self {
        FieldEditState::Editing {
            field,
            raw: current.padded(field),
            committed: current,
        }
    }

    pub fn editing_field(&self) -> Option<TimeField> {
        match self {
            FieldEditState::Displaying => None,
            FieldEditState::Editing { field, .. } => Some(*field),
        }
    }

    /// Replace the raw buffer with the sanitized keystroke text
    pub fn update(&mut self, input: &str) {
        if let FieldEditState::Editing { raw, .. } = self {
            *raw = TimeField::sanitize_input(input);
        }
    }

    /// Leave editing mode, returning the duration with the edited field
    /// normalized into place.
    pub fn commit(&mut self) -> Option<Hms> {
        match std::mem::take(self) {
            FieldEditState::Displaying => None,
            FieldEditState::Editing {
                field,
                raw,
                committed,
            } => Some(committed.with(field, field.normalize(&raw))),
        }
    }

    /// Text to show for `field` given the derived duration
    pub fn text(&self, field: TimeField, current: Hms) -> String {
        match self {
            FieldEditState::Editing {
                field: editing, raw, ..
            } if *editing == field => raw.clone(),
            _ => current.padded(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_seeds_padded_value() {
        let state = FieldEditState::begin(Hms::new(1, 5, 0), TimeField::Minutes);
        assert_eq!(state.editing_field(), Some(TimeField::Minutes));
        assert_eq!(state.text(TimeField::Minutes, Hms::new(1, 5, 0)), "05");
    }

    #[test]
    fn test_raw_buffer_shadows_only_the_edited_field() {
        let current = Hms::new(2, 30, 15);
        let mut state = FieldEditState::begin(current, TimeField::Seconds);
        state.update("4x");

        assert_eq!(state.text(TimeField::Seconds, current), "4");
        assert_eq!(state.text(TimeField::Hours, current), "02");
        assert_eq!(state.text(TimeField::Minutes, current), "30");
    }

    #[test]
    fn test_commit_replaces_edited_field() {
        let mut state = FieldEditState::begin(Hms::new(1, 2, 3), TimeField::Minutes);
        state.update("45");
        assert_eq!(state.commit(), Some(Hms::new(1, 45, 3)));
        assert_eq!(state, FieldEditState::Displaying);
    }

    #[test]
    fn test_emptied_field_commits_zero() {
        let mut state = FieldEditState::begin(Hms::new(0, 10, 0), TimeField::Minutes);
        state.update("");
        assert_eq!(state.text(TimeField::Minutes, Hms::default()), "0");
        assert_eq!(state.commit(), Some(Hms::new(0, 0, 0)));
    }

    #[test]
    fn test_commit_clamps_out_of_range() {
        let mut state = FieldEditState::begin(Hms::default(), TimeField::Seconds);
        state.update("75");
        assert_eq!(state.commit(), Some(Hms::new(0, 0, 59)));
    }

    #[test]
    fn test_update_and_commit_ignored_while_displaying() {
        let mut state = FieldEditState::Displaying;
        state.update("12");
        assert_eq!(state, FieldEditState::Displaying);
        assert_eq!(state.commit(), None);
    }
}
