//! Property-based tests for rollog using proptest

use proptest::prelude::*;
use rollog::core::format::render;
use rollog::prelude::*;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Fatal),
        Just(Severity::Error),
        Just(Severity::Warning),
        Just(Severity::Info),
        Just(Severity::Debug),
    ]
}

// ============================================================================
// LevelMask Tests
// ============================================================================

proptest! {
    /// Enablement is monotonic in severity order: a cumulative mask
    /// enables exactly the severities at or above its cutoff.
    #[test]
    fn test_mask_monotonicity(cutoff in any_severity(), severity in any_severity()) {
        let mask = LevelMask::at_least(cutoff);
        prop_assert_eq!(mask.enables(severity), severity <= cutoff);
    }

    /// Any mask built from a name enables Fatal and Error; there is no
    /// way to silence Fatal while enabling anything else.
    #[test]
    fn test_named_masks_always_carry_fatal(name in "\\PC{0,12}") {
        let mask = LevelMask::from_name(&name);
        prop_assert!(mask.enables(Severity::Fatal));
        prop_assert!(mask.enables(Severity::Error));
    }

    /// Name lookup ignores case.
    #[test]
    fn test_from_name_case_insensitive(name in "[a-zA-Z]{0,12}") {
        prop_assert_eq!(
            LevelMask::from_name(&name),
            LevelMask::from_name(&name.to_uppercase())
        );
    }

    /// Looking a name up twice gives the same mask.
    #[test]
    fn test_from_name_idempotent_over_known_names(use_upper in any::<bool>()) {
        for name in ["fatal", "error", "warn", "warning", "debug", "info", "all", ""] {
            let input = if use_upper { name.to_uppercase() } else { name.to_string() };
            prop_assert_eq!(LevelMask::from_name(&input), LevelMask::from_name(name));
        }
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// Rendering never leaks a raw line break, whatever the message.
    #[test]
    fn test_render_is_single_line(severity in any_severity(), message in ".*") {
        let rendered = render(severity, false, &message);
        prop_assert!(!rendered.contains('\n'));
        prop_assert!(!rendered.contains('\r'));
    }

    /// The severity tag leads the rendered body.
    #[test]
    fn test_render_leads_with_tag(severity in any_severity(), message in "[a-z ]{0,40}") {
        let rendered = render(severity, false, &message);
        prop_assert!(rendered.starts_with(&format!("[{}] ", severity.tag())), "tag should lead rendered output");
    }
}

// ============================================================================
// Logger Round-Trip Tests
// ============================================================================

proptest! {
    /// A cloned logger reports the same configuration as its source.
    #[test]
    fn test_clone_preserves_level(cutoff in any_severity()) {
        let logger = Logger::with_writer(Box::new(std::io::sink()));
        logger.set_level(LevelMask::at_least(cutoff));

        let clone = logger.try_clone().expect("clone without file is infallible");
        prop_assert_eq!(clone.level(), logger.level());
    }
}
