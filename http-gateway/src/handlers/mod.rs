//! The application's handlers. Button and modal ids are fixed here since they
//! are baked into custom ids of messages that may outlive a deploy.

mod echo;
mod feedback;
mod ping;
mod report;
mod say;
mod whois;

use interactions::{Registry, RegistryError};

pub const PING_AGAIN_BUTTON: u16 = 1;
pub const FEEDBACK_MODAL: u16 = 2;

pub fn registry() -> Result<Registry, RegistryError> {
    Registry::build(
        vec![
            ping::command(),
            echo::command(),
            report::command(),
            say::command(),
            feedback::command(),
            whois::command(),
        ],
        vec![ping::button()],
        vec![feedback::modal()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_builds() {
        let registry = registry().unwrap();

        assert_eq!(registry.command_count(), 6);
        assert!(registry.lookup_button(PING_AGAIN_BUTTON).is_some());
        assert!(registry.lookup_modal(FEEDBACK_MODAL).is_some());
        assert!(registry.lookup_command("say").unwrap().owner_only);
    }
}
