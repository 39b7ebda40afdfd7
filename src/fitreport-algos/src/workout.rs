use fitreport_types::Goal;
use rand::Rng;

const CARDIO: [&str; 6] = ["run", "swim", "boxing", "HIIT", "karate", "hiking"];
const STRENGTH: [&str; 5] = ["powerlifting", "calisthenics", "pushups", "squats", "deadlift"];
const FLEXIBILITY: [&str; 3] = ["yoga", "stretch", "swim"];
/// Cardio, strength and flexibility pools back to back; "swim" appears twice.
const ALL: [&str; 14] = [
    "run",
    "swim",
    "boxing",
    "HIIT",
    "karate",
    "hiking",
    "powerlifting",
    "calisthenics",
    "pushups",
    "squats",
    "deadlift",
    "yoga",
    "stretch",
    "swim",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutPool {
    Cardio,
    Strength,
    Flexibility,
    All,
}

impl WorkoutPool {
    /// Goal to pool table.
    ///
    /// `Flexibility` maps to the cardio pool, matching the behaviour users
    /// have been getting so far. The flexibility pool is only reachable
    /// through [`WorkoutSelector::select_from`].
    pub fn for_goal(goal: &Goal) -> Self {
        match goal {
            Goal::Cardio => WorkoutPool::Cardio,
            Goal::Flexibility => WorkoutPool::Cardio,
            Goal::Strength => WorkoutPool::Strength,
            Goal::MuscleGain => WorkoutPool::Strength,
            Goal::Other(_) => WorkoutPool::All,
        }
    }

    pub fn workouts(self) -> &'static [&'static str] {
        match self {
            WorkoutPool::Cardio => &CARDIO,
            WorkoutPool::Strength => &STRENGTH,
            WorkoutPool::Flexibility => &FLEXIBILITY,
            WorkoutPool::All => &ALL,
        }
    }
}

pub struct WorkoutSelector;

impl WorkoutSelector {
    pub fn select<R>(goal: &Goal, rng: &mut R) -> &'static str
    where
        R: Rng,
    {
        let pool = WorkoutPool::for_goal(goal);
        debug!("goal `{}` draws from {:?} pool", goal, pool);
        Self::select_from(pool, rng)
    }

    pub fn select_from<R>(pool: WorkoutPool, rng: &mut R) -> &'static str
    where
        R: Rng,
    {
        let workouts = pool.workouts();
        workouts[rng.random_range(0..workouts.len())]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use fitreport_types::Goal;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn all_pool_is_concatenation() {
        let joined: Vec<&str> = CARDIO
            .iter()
            .chain(STRENGTH.iter())
            .chain(FLEXIBILITY.iter())
            .copied()
            .collect();
        assert_eq!(joined, ALL.to_vec());
    }

    #[test]
    fn goal_table() {
        assert_eq!(WorkoutPool::for_goal(&Goal::Cardio), WorkoutPool::Cardio);
        assert_eq!(WorkoutPool::for_goal(&Goal::Strength), WorkoutPool::Strength);
        assert_eq!(WorkoutPool::for_goal(&Goal::MuscleGain), WorkoutPool::Strength);
        assert_eq!(
            WorkoutPool::for_goal(&Goal::Other("sleep".to_owned())),
            WorkoutPool::All
        );
    }

    #[test]
    fn flexibility_goal_uses_cardio_pool() {
        assert_eq!(WorkoutPool::for_goal(&Goal::Flexibility), WorkoutPool::Cardio);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let workout = WorkoutSelector::select(&Goal::Flexibility, &mut rng);
            assert!(CARDIO.contains(&workout), "{workout} is not cardio");
        }
    }

    #[test]
    fn strength_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let workout = WorkoutSelector::select(&Goal::Strength, &mut rng);
            assert!(STRENGTH.contains(&workout), "{workout} is not strength");
        }
    }

    #[test]
    fn unknown_goal_covers_union_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let goal = Goal::Other("anything".to_owned());
        let seen: HashSet<&str> = (0..2000)
            .map(|_| WorkoutSelector::select(&goal, &mut rng))
            .collect();
        let expected: HashSet<&str> = ALL.iter().copied().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn explicit_flexibility_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let workout = WorkoutSelector::select_from(WorkoutPool::Flexibility, &mut rng);
            assert!(FLEXIBILITY.contains(&workout));
        }
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| WorkoutSelector::select(&Goal::Cardio, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(99), draw(99));
    }
}
