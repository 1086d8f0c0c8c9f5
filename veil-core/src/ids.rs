//! Element identities for one dialog instance
//!
//! Callers may pin the root, content and backdrop ids. Everything else is
//! derived from the root id so two open dialogs never share ARIA targets.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ModalError;

/// Counter for generating unique session ids
static SESSION_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Identity of one dialog session (one mounted component)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub fn next() -> Self {
        SessionId(SESSION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Caller-supplied ids. `None` means "generate one".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalIds {
    pub root: Option<String>,
    pub content: Option<String>,
    pub backdrop: Option<String>,
}

impl ModalIds {
    /// Rejects ids that could not be referenced from `aria-*` id lists
    pub fn validate(&self) -> Result<(), ModalError> {
        let fields = [
            ("root", &self.root),
            ("content", &self.content),
            ("backdrop", &self.backdrop),
        ];

        for (field, value) in fields {
            if let Some(value) = value {
                if value.is_empty() || value.chars().any(char::is_whitespace) {
                    return Err(ModalError::InvalidId {
                        field,
                        value: value.clone(),
                    });
                }
            }
        }

        let supplied: Vec<&String> = fields.iter().filter_map(|(_, v)| v.as_ref()).collect();
        for (i, a) in supplied.iter().enumerate() {
            if supplied[i + 1..].contains(a) {
                return Err(ModalError::DuplicateId {
                    value: (*a).clone(),
                });
            }
        }

        Ok(())
    }
}

/// Fully resolved ids for every element the dialog renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIds {
    pub root: String,
    pub content: String,
    pub backdrop: String,
    pub title: String,
    pub description: String,
    pub footer: String,
}

impl ResolvedIds {
    pub fn new(ids: &ModalIds, session: SessionId) -> Self {
        let root = ids
            .root
            .clone()
            .unwrap_or_else(|| format!("veil-modal-{}", session.get()));

        Self {
            content: ids
                .content
                .clone()
                .unwrap_or_else(|| format!("{root}-content")),
            backdrop: ids
                .backdrop
                .clone()
                .unwrap_or_else(|| format!("{root}-backdrop")),
            title: format!("{root}-title"),
            description: format!("{root}-description"),
            footer: format!("{root}-footer"),
            root,
        }
    }

    /// Rejects a supplied id that lands on another element's derived id,
    /// e.g. root `x` with content `x-title`.
    pub fn validate(&self) -> Result<(), ModalError> {
        let all = [
            &self.root,
            &self.content,
            &self.backdrop,
            &self.title,
            &self.description,
            &self.footer,
        ];
        for (i, a) in all.iter().enumerate() {
            if all[i + 1..].contains(a) {
                return Err(ModalError::DuplicateId {
                    value: (*a).clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_derive_from_root() {
        let ids = ResolvedIds::new(&ModalIds::default(), SessionId(7));
        assert_eq!(ids.root, "veil-modal-7");
        assert_eq!(ids.backdrop, "veil-modal-7-backdrop");
        assert_eq!(ids.title, "veil-modal-7-title");
    }

    #[test]
    fn test_supplied_ids_win() {
        let ids = ModalIds {
            root: Some("settings".into()),
            content: None,
            backdrop: Some("shade".into()),
        };
        let resolved = ResolvedIds::new(&ids, SessionId(1));
        assert_eq!(resolved.root, "settings");
        assert_eq!(resolved.content, "settings-content");
        assert_eq!(resolved.backdrop, "shade");
        assert_eq!(resolved.description, "settings-description");
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::next(), SessionId::next());
    }

    #[test]
    fn test_validate_rejects_whitespace() {
        let ids = ModalIds {
            root: Some("my modal".into()),
            ..Default::default()
        };
        assert_eq!(
            ids.validate(),
            Err(ModalError::InvalidId {
                field: "root",
                value: "my modal".into()
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty() {
        let ids = ModalIds {
            backdrop: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            ids.validate(),
            Err(ModalError::InvalidId { field: "backdrop", .. })
        ));
    }

    #[test]
    fn test_supplied_id_colliding_with_derived_id_is_rejected() {
        let ids = ModalIds {
            root: Some("x".into()),
            content: Some("x-title".into()),
            backdrop: None,
        };
        assert!(ids.validate().is_ok());
        assert_eq!(
            ResolvedIds::new(&ids, SessionId(3)).validate(),
            Err(ModalError::DuplicateId {
                value: "x-title".into()
            })
        );
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let ids = ResolvedIds::new(&ModalIds::default(), SessionId(9));
        assert!(ids.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let ids = ModalIds {
            root: Some("x".into()),
            content: Some("y".into()),
            backdrop: Some("x".into()),
        };
        assert_eq!(
            ids.validate(),
            Err(ModalError::DuplicateId { value: "x".into() })
        );
    }
}
