use super::State;
use crate::models::{ObjectEntry, Slug};

pub fn current_bucket(state: &State) -> &str {
    &state.buckets.current_bucket
}

pub fn current_prefix(state: &State) -> &str {
    &state.objects.current_prefix
}

/// Full object key for a listing entry shown under the current prefix.
pub fn object_key(state: &State, name: &str) -> String {
    format!("{}{}", state.objects.current_prefix, name)
}

pub fn upload_slugs(state: &State) -> Vec<Slug> {
    state.uploads.files.keys().cloned().collect()
}

pub fn is_uploading(state: &State) -> bool {
    !state.uploads.files.is_empty()
}

pub fn object_at(state: &State, index: usize) -> Option<&ObjectEntry> {
    state.objects.list.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_joins_prefix_and_name() {
        let mut state = State::default();
        state.objects.current_prefix = "docs/2024/".into();
        assert_eq!(object_key(&state, "q1.pdf"), "docs/2024/q1.pdf");
        state.objects.current_prefix.clear();
        assert_eq!(object_key(&state, "q1.pdf"), "q1.pdf");
    }
}
