use proptest::prelude::*;

use rootprowler::{frames, resolve, Phase, ScrollSpy, ScrollSpyConfig, Section, SectionRegistry};
use rootprowler::{TypingConfig, TypingSequencer};

fn sections() -> impl Strategy<Value = Vec<Section>> {
    prop::collection::vec((0.0f64..2000.0, 0.0f64..600.0), 0..8).prop_map(|bounds| {
        bounds
            .into_iter()
            .enumerate()
            .map(|(order, (top, height))| Section::new(format!("s{}", order), order, top, height))
            .collect()
    })
}

fn typing_config() -> impl Strategy<Value = TypingConfig> {
    (
        prop::collection::vec("[a-zé ]{0,6}", 1..4),
        1u32..50,
        0u32..200,
        prop::option::of(1u32..50),
        0u32..200,
    )
        .prop_map(|(phrases, type_ms, pause_full, delete_ms, pause_empty)| TypingConfig {
            phrases,
            type_interval_ms: type_ms,
            pause_after_typed_ms: pause_full,
            delete_interval_ms: delete_ms,
            pause_after_deleted_ms: pause_empty,
        })
}

proptest! {
    #[test]
    fn resolve_is_deterministic_and_first_match_wins(
        sections in sections(),
        scroll_y in -1000.0f64..3000.0,
        offset in 0.0f64..200.0,
    ) {
        let first = resolve(scroll_y, &sections, offset, "prev");
        prop_assert_eq!(first, resolve(scroll_y, &sections, offset, "prev"));

        let position = scroll_y + offset;
        match sections.iter().find(|s| s.contains(position)) {
            Some(section) => prop_assert_eq!(first, section.id.as_str()),
            None => prop_assert_eq!(first, "prev"),
        }
    }

    #[test]
    fn active_id_is_default_or_registered(
        registries in prop::collection::vec(sections(), 1..6),
        samples in prop::collection::vec(-500.0f64..3000.0, 1..6),
    ) {
        let config = ScrollSpyConfig::default();
        let mut spy = ScrollSpy::new(&config);
        for (sections, scroll_y) in registries.into_iter().zip(samples) {
            let registry = SectionRegistry::new(sections);
            spy.observe(scroll_y, &registry);
            prop_assert!(
                spy.active_id() == config.default_id || registry.contains_id(spy.active_id())
            );
        }
    }

    #[test]
    fn sequencer_only_makes_legal_moves(config in typing_config(), ticks in 1usize..300) {
        let lengths: Vec<usize> = config.phrases.iter().map(|p| p.chars().count()).collect();
        let mut seq = TypingSequencer::new(config);
        let mut before = seq.state();

        for _ in 0..ticks {
            let step = seq.tick().unwrap();
            let after = seq.state();

            prop_assert!(after.phrase_index < lengths.len());
            prop_assert!(after.visible_length <= lengths[after.phrase_index]);
            prop_assert_eq!(step.display.chars().count(), after.visible_length);

            let legal = matches!(
                (before.phase, after.phase),
                (Phase::Typing, Phase::Typing)
                    | (Phase::Typing, Phase::PausedFull)
                    | (Phase::PausedFull, Phase::Deleting)
                    | (Phase::Deleting, Phase::Deleting)
                    | (Phase::Deleting, Phase::Typing)
            );
            prop_assert!(legal, "{:?} -> {:?}", before.phase, after.phase);
            before = after;
        }
    }

    #[test]
    fn display_stream_is_periodic_and_restartable(config in typing_config()) {
        let period_frames: usize = config
            .phrases
            .iter()
            .map(|p| 2 * p.chars().count().max(1) + 1)
            .sum();
        let period_ms = TypingSequencer::new(config.clone()).cycle_duration_ms();

        let stream: Vec<_> = frames(config.clone()).take(2 * period_frames).collect();
        let (first, second) = stream.split_at(period_frames);
        prop_assert_eq!(first, second);

        let held: u64 = first.iter().map(|f| u64::from(f.hold_ms)).sum();
        prop_assert_eq!(held, period_ms);

        let restarted: Vec<_> = frames(config).take(2 * period_frames).collect();
        prop_assert_eq!(stream, restarted);
    }
}
