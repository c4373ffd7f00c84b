//! # Error Suggestions
//!
//! Helpers that turn library errors into CLI errors with hints. Errors
//! should tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tb::suggestions;
//!
//! let services = engine
//!     .resolve_services(&args.services, args.playlist.as_deref())
//!     .map_err(|e| suggestions::for_error(e, |kind| candidates(&engine, kind)))?;
//! ```

use crate::error::{Error, ResourceKind};
use crate::resource::parse_name;

/// Attach hints to a library error.
///
/// `candidates` returns the known full names of a resource kind and is only
/// called for `NotFound` errors, to look for a close match.
pub fn for_error<F>(error: Error, candidates: F) -> anyhow::Error
where
    F: FnOnce(ResourceKind) -> Vec<String>,
{
    let hints = match error.root() {
        Error::NotFound { kind, name } => {
            let known = candidates(*kind);
            let did_you_mean = find_similar_name(name, &known)
                .map(|s| format!("hint: Did you mean '{s}'?\n"))
                .unwrap_or_default();
            Some(format!(
                "{did_you_mean}hint: Run 'tb list' to see available {kind}s"
            ))
        }
        Error::MultipleResources {
            name, registries, ..
        } => {
            let example = registries
                .first()
                .map(|r| format!(", e.g. '{r}/{name}'"))
                .unwrap_or_default();
            Some(format!(
                "hint: Use the full name <org>/<repo>/{name} to pick one{example}"
            ))
        }
        Error::CircularDependency { playlist, extends } => Some(format!(
            "hint: Playlist {playlist} extends {extends}, which is already on its 'extends' chain\n\
             hint: Remove one of the 'extends' entries to break the cycle"
        )),
        Error::InvalidName { .. } => {
            Some("hint: Names have the form <name> or <org>/<repo>/<name>".to_string())
        }
        Error::Timeout { .. } => {
            Some("hint: Check your network connection, or lower --concurrency".to_string())
        }
        _ => None,
    };

    match hints {
        Some(hints) => anyhow::anyhow!("{error}\n\n{hints}"),
        None => anyhow::Error::new(error),
    }
}

/// Generate an error for `tb up` without any services.
pub fn nothing_to_start() -> anyhow::Error {
    anyhow::anyhow!(
        "No services or playlist specified\n\n\
         hint: Pass service names, e.g. 'tb up postgres redis'\n\
         hint: Use -p/--playlist to start a playlist\n\
         hint: Run 'tb list' to see available services and playlists"
    )
}

/// Generate an error for commands that need at least one registry.
pub fn no_registries() -> anyhow::Error {
    anyhow::anyhow!(
        "No registries configured\n\n\
         hint: Run 'tb registry add <org>/<repo>' to add one\n\
         hint: Use TB_RC to point at a different rc file"
    )
}

/// Find a known full name close to `input`.
///
/// Short input is compared against the item part of each candidate, full
/// input against the whole name. The suggestion is in the same form the user
/// typed it.
fn find_similar_name(input: &str, candidates: &[String]) -> Option<String> {
    let short = matches!(parse_name(input), Ok((registry, _)) if registry.is_empty());
    let forms: Vec<&str> = candidates
        .iter()
        .map(|candidate| {
            if short {
                candidate.rsplit('/').next().unwrap_or(candidate)
            } else {
                candidate.as_str()
            }
        })
        .collect();
    find_similar(input, &forms).map(str::to_string)
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }

    // Two rolling rows of the distance matrix
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(kind: ResourceKind) -> Vec<String> {
        match kind {
            ResourceKind::Service => vec![
                "TouchBistro/tb-registry/postgres".to_string(),
                "TouchBistro/tb-registry/redis".to_string(),
            ],
            _ => vec!["TouchBistro/tb-registry/core".to_string()],
        }
    }

    #[test]
    fn test_not_found_suggests_similar_short_name() {
        let error = Error::NotFound {
            kind: ResourceKind::Service,
            name: "postgre".to_string(),
        };
        let message = for_error(error, known).to_string();

        assert!(message.starts_with("service postgre not found"));
        assert!(message.contains("Did you mean 'postgres'?"));
        assert!(message.contains("Run 'tb list' to see available services"));
    }

    #[test]
    fn test_not_found_suggests_similar_full_name() {
        let error = Error::NotFound {
            kind: ResourceKind::Service,
            name: "TouchBistro/tb-registry/rediss".to_string(),
        };
        let message = for_error(error, known).to_string();
        assert!(message.contains("Did you mean 'TouchBistro/tb-registry/redis'?"));
    }

    #[test]
    fn test_not_found_without_close_match() {
        let error = Error::NotFound {
            kind: ResourceKind::Playlist,
            name: "frontend".to_string(),
        };
        let message = for_error(error, known).to_string();
        assert!(!message.contains("Did you mean"));
        assert!(message.contains("available playlists"));
    }

    #[test]
    fn test_wrapped_not_found_keeps_chain() {
        let error = Error::Playlist {
            name: "mine".to_string(),
            extended_by: None,
            source: Box::new(Error::NotFound {
                kind: ResourceKind::Playlist,
                name: "cor".to_string(),
            }),
        };
        let message = for_error(error, known).to_string();
        assert!(message.starts_with("failed to resolve playlist mine: playlist cor not found"));
        assert!(message.contains("Did you mean 'core'?"));
    }

    #[test]
    fn test_multiple_resources_hint() {
        let error = Error::MultipleResources {
            kind: ResourceKind::Service,
            name: "postgres".to_string(),
            registries: vec!["TouchBistro/tb-registry".to_string(), "A/b".to_string()],
        };
        let message = for_error(error, |_| unreachable!()).to_string();
        assert!(message.contains("e.g. 'TouchBistro/tb-registry/postgres'"));
    }

    #[test]
    fn test_circular_dependency_names_both_playlists() {
        let error = Error::CircularDependency {
            playlist: "R/r/core".to_string(),
            extends: "R/r/core-2".to_string(),
        };
        let message = for_error(error, |_| unreachable!()).to_string();
        assert!(message.contains("Playlist R/r/core extends R/r/core-2"));
        assert!(message.contains("break the cycle"));
    }

    #[test]
    fn test_circular_dependency_hint_for_longer_cycle() {
        use crate::playlist::{Playlist, PlaylistCollection};

        let mut playlists = PlaylistCollection::default();
        for (name, extends) in [("a", "b"), ("b", "c"), ("c", "a")] {
            playlists.set_custom(Playlist {
                name: name.to_string(),
                extends: Some(extends.to_string()),
                ..Default::default()
            });
        }
        let error = playlists.service_names("a").unwrap_err();
        let message = for_error(error, |_| unreachable!()).to_string();

        assert!(message.contains("Playlist c extends a, which is already on its 'extends' chain"));
        assert!(!message.contains("which already extends"));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let error = Error::Compose {
            command: "up".to_string(),
            stderr: "boom".to_string(),
        };
        let message = for_error(error, |_| unreachable!()).to_string();
        assert_eq!(message, "docker compose up failed: boom");
    }

    #[test]
    fn test_nothing_to_start_includes_hints() {
        let message = nothing_to_start().to_string();
        assert!(message.contains("No services or playlist specified"));
        assert!(message.contains("-p/--playlist"));
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("postgres", "postgres"), 0);
        assert_eq!(edit_distance("postgre", "postgres"), 1);
        assert_eq!(edit_distance("potsgres", "postgres"), 2);
        assert_eq!(edit_distance("", "redis"), 5);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_find_similar() {
        let candidates = ["postgres", "redis", "core"];
        assert_eq!(find_similar("redsi", &candidates), Some("redis"));
        assert_eq!(find_similar("cor", &candidates), Some("core"));
        assert_eq!(find_similar("frontend", &candidates), None);
    }
}
