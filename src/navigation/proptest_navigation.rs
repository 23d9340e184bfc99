//! Property-based tests for the navigation state machine using proptest.
//!
//! Random interleavings of user intents and rig completions must keep the
//! mode and section consistent, and rejected requests must never mutate
//! state.

use bevy::prelude::*;
use proptest::prelude::*;

use super::state::{Mode, NavigationState, StepDirection, Transition};
use crate::sections::{ORDERED_SECTIONS, SECTION_COUNT, SectionId};
use crate::test_utils::fixtures;

#[derive(Clone, Debug)]
enum Intent {
    Pick(SectionId),
    PickSection(SectionId),
    Back,
    GoToIndex(usize),
    Step(StepDirection),
    WarpArrived(SectionId),
    ReturnArrived,
}

fn section() -> impl Strategy<Value = SectionId> {
    (0..SECTION_COUNT).prop_map(|i| ORDERED_SECTIONS[i])
}

fn intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        section().prop_map(Intent::Pick),
        section().prop_map(Intent::PickSection),
        Just(Intent::Back),
        (0..SECTION_COUNT + 2).prop_map(Intent::GoToIndex),
        prop_oneof![Just(StepDirection::Forward), Just(StepDirection::Backward)]
            .prop_map(Intent::Step),
        section().prop_map(Intent::WarpArrived),
        Just(Intent::ReturnArrived),
    ]
}

fn apply(state: &mut NavigationState, intent: &Intent) -> bool {
    let resolver = fixtures::orbit_resolver();
    let result = match *intent {
        Intent::Pick(section) => state.pick(section, section.placement().radius * Vec3::X),
        Intent::PickSection(section) => state.pick_section(section, &resolver),
        Intent::Back => state.back(),
        Intent::GoToIndex(index) => state.navigate_to_index(index, &resolver),
        Intent::Step(direction) => state.step(direction, &resolver),
        Intent::WarpArrived(section) => state.warp_arrived(section),
        Intent::ReturnArrived => state.return_arrived(),
    };
    result.is_ok()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Section presence always agrees with the mode.
    #[test]
    fn prop_mode_and_section_agree(intents in prop::collection::vec(intent(), 0..60)) {
        let mut state = NavigationState::new();
        for intent in &intents {
            apply(&mut state, intent);
            match state.mode() {
                Mode::Hub | Mode::WarpingBack => {
                    prop_assert_eq!(state.current_section(), None);
                    prop_assert_eq!(state.section_index(), None);
                }
                Mode::WarpingTo | Mode::Panel => {
                    let section = state.current_section();
                    prop_assert!(section.is_some());
                    prop_assert_eq!(state.section_index(), section.map(|s| s.index()));
                    prop_assert!(state.target().is_some());
                }
            }
            prop_assert_eq!(state.is_locked(), state.mode().is_warping());
        }
    }

    /// A rejected request leaves the state exactly as it was.
    #[test]
    fn prop_rejected_requests_do_not_mutate(intents in prop::collection::vec(intent(), 0..60)) {
        let mut state = NavigationState::new();
        for intent in &intents {
            let before = state.clone();
            if !apply(&mut state, intent) {
                prop_assert_eq!(&state, &before, "{:?} mutated state", intent);
            }
        }
    }

    /// Index navigation never changes anything while a warp is in flight.
    #[test]
    fn prop_locked_while_warping(
        intents in prop::collection::vec(intent(), 0..40),
        index in 0..SECTION_COUNT,
        forward in any::<bool>(),
    ) {
        let mut state = NavigationState::new();
        for intent in &intents {
            apply(&mut state, intent);
        }
        if state.is_locked() {
            let before = state.clone();
            let resolver = fixtures::orbit_resolver();
            let direction = if forward { StepDirection::Forward } else { StepDirection::Backward };
            prop_assert!(state.navigate_to_index(index, &resolver).is_err());
            prop_assert!(state.step(direction, &resolver).is_err());
            prop_assert_eq!(state, before);
        }
    }

    /// Back is idempotent once the first back has been accepted.
    #[test]
    fn prop_back_is_idempotent(intents in prop::collection::vec(intent(), 0..40), repeats in 1usize..5) {
        let mut state = NavigationState::new();
        for intent in &intents {
            apply(&mut state, intent);
        }
        let _ = state.back();
        let settled = state.clone();
        for _ in 0..repeats {
            prop_assert_eq!(state.back(), Ok(Transition::Unchanged));
        }
        prop_assert_eq!(state, settled);
    }
}
