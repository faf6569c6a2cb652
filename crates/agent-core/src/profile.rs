//! Data-driven persona profiles.
//!
//! The six personas are plain records, not types: selection is a table
//! lookup, and the whole set is built once at startup and shared by
//! reference for the life of the process.

use crate::classify::Leaning;

/// What a profile is allowed to do on behalf of the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capability {
    pub post: bool,
    pub reply: bool,
    pub classify: bool,
    pub search: bool,
}

impl Capability {
    /// A profile with no outward capabilities.
    pub const NONE: Self = Self {
        post: false,
        reply: false,
        classify: false,
        search: false,
    };
}

/// An immutable named persona configuration used to parameterize a
/// completion request.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Stable profile name.
    pub name: &'static str,
    /// Persona text embedded into prompts.
    pub role: &'static str,
    /// Capability set.
    pub capabilities: Capability,
}

/// The six built-in profiles, immutable after construction.
#[derive(Debug, Clone)]
pub struct ProfileSet {
    operator: Profile,
    analyst: Profile,
    responder: Profile,
    mediator: Profile,
    herald: Profile,
    scout: Profile,
}

impl ProfileSet {
    /// Build the six fixed profiles.
    pub fn builtin() -> Self {
        Self {
            operator: Profile {
                name: "operator",
                role: "You interact with the human operator. Present numbered \
                       message listings clearly and relay free-text instructions.",
                capabilities: Capability::NONE,
            },
            analyst: Profile {
                name: "analyst",
                role: "You are the analyst and editor. Assess a message's intent \
                       and tone, classify it, and rewrite drafts concisely and \
                       respectfully within the character budget.",
                capabilities: Capability {
                    classify: true,
                    reply: true,
                    ..Capability::NONE
                },
            },
            responder: Profile {
                name: "responder",
                role: "You are the responder. Craft thoughtful, assertive replies \
                       with a progressive perspective.",
                capabilities: Capability {
                    reply: true,
                    ..Capability::NONE
                },
            },
            mediator: Profile {
                name: "mediator",
                role: "You are the balanced mediator. Respond with a measured, \
                       soothing tone that finds middle ground while staying \
                       respectful.",
                capabilities: Capability {
                    reply: true,
                    ..Capability::NONE
                },
            },
            herald: Profile {
                name: "herald",
                role: "You post finished messages to the social network.",
                capabilities: Capability {
                    post: true,
                    ..Capability::NONE
                },
            },
            scout: Profile {
                name: "scout",
                role: "You locate accounts and fetch their recent messages.",
                capabilities: Capability {
                    search: true,
                    ..Capability::NONE
                },
            },
        }
    }

    pub fn operator(&self) -> &Profile {
        &self.operator
    }

    pub fn analyst(&self) -> &Profile {
        &self.analyst
    }

    pub fn responder(&self) -> &Profile {
        &self.responder
    }

    pub fn mediator(&self) -> &Profile {
        &self.mediator
    }

    pub fn herald(&self) -> &Profile {
        &self.herald
    }

    pub fn scout(&self) -> &Profile {
        &self.scout
    }

    /// Look up a profile by name.
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.iter().find(|p| p.name == name)
    }

    /// Iterate over all six profiles.
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        [
            &self.operator,
            &self.analyst,
            &self.responder,
            &self.mediator,
            &self.herald,
            &self.scout,
        ]
        .into_iter()
    }

    /// Select the response-generation profile for a classified message.
    ///
    /// Total and deterministic: the polarizing label selects the
    /// mediator, every other label (including unclassified) selects the
    /// default responder.
    pub fn responder_for(&self, leaning: Leaning) -> &Profile {
        if leaning.is_polarizing() {
            &self.mediator
        } else {
            &self.responder
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_six_profiles() {
        let profiles = ProfileSet::builtin();
        assert_eq!(profiles.iter().count(), 6);
    }

    #[test]
    fn test_lookup_by_name() {
        let profiles = ProfileSet::builtin();
        assert_eq!(profiles.get("mediator").expect("present").name, "mediator");
        assert!(profiles.get("nobody").is_none());
    }

    #[test]
    fn test_router_is_total() {
        let profiles = ProfileSet::builtin();
        for leaning in [
            Leaning::FarLeft,
            Leaning::Left,
            Leaning::Middle,
            Leaning::Right,
            Leaning::FarRight,
            Leaning::Unclassified,
        ] {
            let selected = profiles.responder_for(leaning);
            assert!(selected.name == "responder" || selected.name == "mediator");
        }
    }

    #[test]
    fn test_polarizing_label_routes_to_mediator() {
        let profiles = ProfileSet::builtin();
        assert_eq!(profiles.responder_for(Leaning::FarRight).name, "mediator");
        assert_eq!(profiles.responder_for(Leaning::Left).name, "responder");
        assert_eq!(
            profiles.responder_for(Leaning::Unclassified).name,
            "responder"
        );
    }

    #[test]
    fn test_capabilities() {
        let profiles = ProfileSet::builtin();
        assert!(profiles.herald().capabilities.post);
        assert!(!profiles.operator().capabilities.reply);
        assert!(profiles.analyst().capabilities.classify);
        assert!(profiles.scout().capabilities.search);
    }
}
