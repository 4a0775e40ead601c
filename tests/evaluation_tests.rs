use adversarial_search::{
    Action, AdversarialSearch, AlphaBeta, Coord, EvaluationFunction, EvaluationRegistry,
    Expectimax, GameState, GameTree, Minimax, ProximityEvaluation, ScoreEvaluation, SearchConfig,
    SearchEngine, SpatialState,
};

const SIZE: i64 = 5;
const CAUGHT_PENALTY: f64 = -500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Stay,
    North,
    South,
    East,
    West,
}

impl Action for Step {}

impl Step {
    const ALL: [Step; 5] = [Step::Stay, Step::North, Step::South, Step::East, Step::West];

    fn apply(self, from: Coord) -> Coord {
        match self {
            Step::Stay => from,
            Step::North => Coord::new(from.x, from.y - 1),
            Step::South => Coord::new(from.x, from.y + 1),
            Step::East => Coord::new(from.x + 1, from.y),
            Step::West => Coord::new(from.x - 1, from.y),
        }
    }
}

// Agents on an open grid; the protagonist loses when an adversary reaches it.
#[derive(Clone, Debug)]
struct Chase {
    positions: Vec<Coord>,
    bonus: f64,
}

impl Chase {
    fn new(positions: &[(i64, i64)]) -> Self {
        Chase {
            positions: positions.iter().copied().map(Coord::from).collect(),
            bonus: 0.0,
        }
    }

    fn caught(&self) -> bool {
        self.positions[1..].contains(&self.positions[0])
    }
}

impl GameState for Chase {
    type Action = Step;

    fn is_win(&self) -> bool {
        false
    }

    fn is_lose(&self) -> bool {
        self.caught()
    }

    fn num_agents(&self) -> usize {
        self.positions.len()
    }

    fn legal_actions(&self, agent: usize) -> Vec<Step> {
        let from = self.positions[agent];
        Step::ALL
            .iter()
            .copied()
            .filter(|step| {
                let to = step.apply(from);
                (0..SIZE).contains(&to.x) && (0..SIZE).contains(&to.y)
            })
            .collect()
    }

    fn successor(&self, agent: usize, action: &Step) -> Self {
        let mut next = self.clone();
        next.positions[agent] = action.apply(self.positions[agent]);
        next
    }

    fn score(&self) -> f64 {
        if self.caught() {
            CAUGHT_PENALTY
        } else {
            self.bonus
        }
    }
}

impl SpatialState for Chase {
    fn position_of(&self, agent: usize) -> Coord {
        self.positions[agent]
    }
}

#[test]
fn test_score_evaluation_returns_state_score() {
    let mut state = Chase::new(&[(0, 0), (4, 4)]);
    state.bonus = 12.5;

    assert_eq!(ScoreEvaluation.evaluate(&state), 12.5);
}

#[test]
fn test_proximity_evaluation_penalizes_nearby_adversaries() {
    let mut state = Chase::new(&[(2, 2), (2, 4), (4, 4), (0, 2)]);
    state.bonus = 10.0;

    // Distances 2, 4 and 2: nearest is 2, two adversaries within 2 steps.
    assert_eq!(ProximityEvaluation::default().evaluate(&state), 10.0 - 2.0 - 2.0);

    // A tighter threshold no longer counts the adversaries two steps away.
    assert_eq!(ProximityEvaluation::new(1).evaluate(&state), 10.0 - 2.0);
}

#[test]
fn test_proximity_evaluation_without_adversaries() {
    let mut state = Chase::new(&[(1, 1)]);
    state.bonus = 3.0;

    assert_eq!(ProximityEvaluation::default().evaluate(&state), 3.0);
}

#[test]
fn test_proximity_is_monotonic_in_score() {
    let low = Chase::new(&[(0, 0), (1, 1)]);
    let mut high = low.clone();
    high.bonus = 1.0;

    let evaluation = ProximityEvaluation::default();
    assert!(evaluation.evaluate(&high) > evaluation.evaluate(&low));
}

#[test]
fn test_spatial_registry_names() {
    let registry = EvaluationRegistry::<Chase>::spatial();
    assert_eq!(registry.names(), vec!["better", "proximity", "score"]);
    assert_eq!(registry.len(), 3);
    assert!(registry.contains("better"));

    let standard = EvaluationRegistry::<GameTree>::standard();
    assert_eq!(standard.names(), vec!["score"]);
    assert!(!standard.contains("proximity"));

    assert!(EvaluationRegistry::<Chase>::new().is_empty());
}

#[test]
fn test_registered_functions_are_looked_up_by_name() {
    let mut registry = EvaluationRegistry::<Chase>::spatial();
    registry.register("bonus_only", |state: &Chase| state.bonus * 2.0);

    let mut state = Chase::new(&[(2, 2), (2, 3)]);
    state.bonus = 4.0;

    assert_eq!(registry.get("bonus_only").unwrap().evaluate(&state), 8.0);
    assert_eq!(registry.get("better").unwrap().evaluate(&state), 4.0 - 1.0 - 1.0);
    assert!(registry.get("missing").is_err());
}

#[test]
fn test_engines_avoid_capture() {
    let registry = EvaluationRegistry::<Chase>::spatial();
    let config = SearchConfig::from_registry(&registry, "better", 1).unwrap();
    let state = Chase::new(&[(2, 2), (3, 2)]);

    let mut engines: Vec<Box<dyn AdversarialSearch<Chase>>> = vec![
        Box::new(Minimax::seeded(8)),
        Box::new(AlphaBeta::new()),
        Box::new(Expectimax::new()),
    ];

    for engine in engines.iter_mut() {
        let step = engine.choose_action(&state, &config).unwrap();
        assert!(
            matches!(step, Step::North | Step::South | Step::West),
            "{} chose {:?}",
            engine.name(),
            step
        );
    }
}

#[test]
fn test_alpha_beta_values_escape_by_worst_case() {
    let config = SearchConfig::new(1, ProximityEvaluation::default()).unwrap();
    let state = Chase::new(&[(2, 2), (3, 2)]);

    let mut alpha_beta = AlphaBeta::new();
    let outcome = alpha_beta.search(&state, &config).unwrap();

    // Every escape is answered by the adversary keeping its distance.
    assert_eq!(outcome.value, -3.0);
    assert_eq!(outcome.action, Step::North);
}
