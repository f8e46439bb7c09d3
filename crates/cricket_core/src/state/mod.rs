//! Process-wide registry of live matches.
//!
//! The engine itself is single-threaded by construction; serialization
//! of concurrent submitters happens here. Each match sits behind its own
//! mutex, so scoring one match never blocks another, and the registry
//! lock is only held long enough to look the match up.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::engine::ScoringEngine;
use crate::error::{Result, ScoringError};

static MATCH_REGISTRY: Lazy<RwLock<HashMap<Uuid, Arc<Mutex<ScoringEngine>>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Adds a match to the registry and returns its id.
pub fn register_match(engine: ScoringEngine) -> Uuid {
    let match_id = engine.match_id();
    MATCH_REGISTRY
        .write()
        .expect("MATCH_REGISTRY lock poisoned")
        .insert(match_id, Arc::new(Mutex::new(engine)));
    match_id
}

/// Runs `f` with exclusive access to one match's engine. Events from
/// concurrent submitters are serialized by the per-match mutex, which
/// is what makes the engine's sequence numbers trustworthy.
pub fn with_match<T, F>(match_id: &Uuid, f: F) -> Result<T>
where
    F: FnOnce(&mut ScoringEngine) -> Result<T>,
{
    let engine = {
        let registry = MATCH_REGISTRY
            .read()
            .expect("MATCH_REGISTRY lock poisoned");
        registry.get(match_id).cloned()
    };
    match engine {
        Some(engine) => {
            let mut guard = engine.lock().expect("match lock poisoned");
            f(&mut guard)
        }
        None => Err(ScoringError::IllegalStateTransition(format!(
            "unknown match id: {match_id}"
        ))),
    }
}

/// Drops a match from the registry. Returns whether it was present.
pub fn remove_match(match_id: &Uuid) -> bool {
    MATCH_REGISTRY
        .write()
        .expect("MATCH_REGISTRY lock poisoned")
        .remove(match_id)
        .is_some()
}

pub fn match_count() -> usize {
    MATCH_REGISTRY
        .read()
        .expect("MATCH_REGISTRY lock poisoned")
        .len()
}

/// Clears every registered match. Test hook.
pub fn reset_registry() {
    MATCH_REGISTRY
        .write()
        .expect("MATCH_REGISTRY lock poisoned")
        .clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{InningsOpeners, MatchConfig};
    use crate::models::{BallEvent, MatchType};

    fn new_engine() -> ScoringEngine {
        ScoringEngine::new(MatchConfig::new(MatchType::T20, "Home", "Away"))
    }

    #[test]
    fn register_and_mutate_through_the_registry() {
        let match_id = register_match(new_engine());

        let sequence = with_match(&match_id, |engine| {
            engine.start_innings(InningsOpeners::new("Gill", "Jaiswal", "Starc"))?;
            let reference = engine.next_ball_reference();
            let outcome =
                engine.apply(BallEvent::runs("Gill", "Starc", 4).with_reference(reference))?;
            Ok(outcome.sequence)
        })
        .unwrap();
        assert_eq!(sequence, 2);

        with_match(&match_id, |engine| {
            assert_eq!(engine.current_innings().map(|i| i.runs), Some(4));
            Ok(())
        })
        .unwrap();

        assert!(remove_match(&match_id));
        assert!(!remove_match(&match_id));
    }

    #[test]
    fn unknown_match_ids_are_rejected() {
        let missing = Uuid::new_v4();
        let err = with_match(&missing, |_| Ok(())).unwrap_err();
        assert!(matches!(err, ScoringError::IllegalStateTransition(_)));
    }

    #[test]
    fn matches_are_isolated_from_each_other() {
        let first = register_match(new_engine());
        let second = register_match(new_engine());
        assert!(match_count() >= 2);

        with_match(&first, |engine| {
            engine.start_innings(InningsOpeners::new("Gill", "Jaiswal", "Starc"))
        })
        .unwrap();

        with_match(&second, |engine| {
            assert_eq!(engine.innings_count(), 0);
            Ok(())
        })
        .unwrap();

        remove_match(&first);
        remove_match(&second);
    }
}
