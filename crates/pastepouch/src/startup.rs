//! Startup selection of storage target and front end.
//!
//! Flags win. Without a flag the user picks from a `dialoguer` list; when
//! no prompt can be shown the first option is used.

use dialoguer::Select;

use crate::config::{Mode, StorageTarget};

pub fn resolve_target(flag: Option<StorageTarget>) -> StorageTarget {
    flag.unwrap_or_else(|| {
        choose(
            "Which database should be used?",
            &StorageTarget::ALL,
            StorageTarget::label,
        )
    })
}

pub fn resolve_mode(flag: Option<Mode>) -> Mode {
    flag.unwrap_or_else(|| choose("How should pastes be served?", &Mode::ALL, Mode::label))
}

fn choose<T: Copy>(prompt: &str, options: &[T], label: fn(T) -> &'static str) -> T {
    let default = options[0];
    let items: Vec<&str> = options.iter().map(|option| label(*option)).collect();

    match Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()
    {
        Ok(index) => options.get(index).copied().unwrap_or(default),
        Err(e) => {
            tracing::warn!(
                error = %e,
                choice = label(default),
                "Prompt unavailable, using default"
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_skip_the_prompt() {
        assert_eq!(
            resolve_target(Some(StorageTarget::Remote)),
            StorageTarget::Remote
        );
        assert_eq!(resolve_mode(Some(Mode::Cli)), Mode::Cli);
    }

    #[test]
    fn test_defaults_come_first() {
        assert_eq!(StorageTarget::ALL[0], StorageTarget::Local);
        assert_eq!(Mode::ALL[0], Mode::Http);
    }
}
