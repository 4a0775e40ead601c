//! Grid chase example for the adversarial search engines
//!
//! A collector wanders a small walled grid eating pellets while chasers close
//! in. Each engine in turn plays a game as the collector; the chasers move at
//! random.

use std::fmt;

use adversarial_search::{
    AdversarialSearch, AlphaBeta, Coord, EvaluationRegistry, Expectimax, GameState, Minimax,
    SearchConfig, SearchEngine, SpatialState,
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

const WIDTH: i64 = 7;
const HEIGHT: i64 = 7;
const MAX_TURNS: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Move {
    Stop,
    North,
    South,
    East,
    West,
}

impl adversarial_search::Action for Move {}

impl Move {
    const ALL: [Move; 5] = [Move::Stop, Move::North, Move::South, Move::East, Move::West];

    fn apply(self, from: Coord) -> Coord {
        match self {
            Move::Stop => from,
            Move::North => Coord::new(from.x, from.y - 1),
            Move::South => Coord::new(from.x, from.y + 1),
            Move::East => Coord::new(from.x + 1, from.y),
            Move::West => Coord::new(from.x - 1, from.y),
        }
    }
}

#[derive(Clone)]
struct GridChase {
    agents: Vec<Coord>,
    pellets: Vec<Coord>,
    score: f64,
}

impl GridChase {
    fn new() -> Self {
        let mut pellets = Vec::new();
        for y in (1..HEIGHT).step_by(2) {
            for x in (1..WIDTH).step_by(2) {
                pellets.push(Coord::new(x, y));
            }
        }

        GridChase {
            agents: vec![Coord::new(0, 0), Coord::new(6, 6), Coord::new(6, 0)],
            pellets,
            score: 0.0,
        }
    }

    fn caught(&self) -> bool {
        self.agents[1..].contains(&self.agents[0])
    }

    fn in_bounds(at: Coord) -> bool {
        (0..WIDTH).contains(&at.x) && (0..HEIGHT).contains(&at.y)
    }
}

impl GameState for GridChase {
    type Action = Move;

    fn is_win(&self) -> bool {
        self.pellets.is_empty() && !self.caught()
    }

    fn is_lose(&self) -> bool {
        self.caught()
    }

    fn num_agents(&self) -> usize {
        self.agents.len()
    }

    fn legal_actions(&self, agent: usize) -> Vec<Move> {
        let from = self.agents[agent];
        Move::ALL
            .iter()
            .copied()
            // Chasers never stand still
            .filter(|m| agent == 0 || *m != Move::Stop)
            .filter(|m| Self::in_bounds(m.apply(from)))
            .collect()
    }

    fn successor(&self, agent: usize, action: &Move) -> Self {
        let mut next = self.clone();
        let to = action.apply(self.agents[agent]);
        next.agents[agent] = to;

        if agent == 0 {
            next.score -= 1.0;
            if let Some(i) = next.pellets.iter().position(|p| *p == to) {
                next.pellets.swap_remove(i);
                next.score += 10.0;
                if next.pellets.is_empty() {
                    next.score += 500.0;
                }
            }
        }

        if next.caught() {
            next.score -= 500.0;
        }
        next
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl SpatialState for GridChase {
    fn position_of(&self, agent: usize) -> Coord {
        self.agents[agent]
    }
}

impl fmt::Display for GridChase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let at = Coord::new(x, y);
                let symbol = if self.agents[0] == at {
                    "C"
                } else if self.agents[1..].contains(&at) {
                    "X"
                } else if self.pellets.contains(&at) {
                    "."
                } else {
                    " "
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "score: {}", self.score)
    }
}

fn play<E>(engine: &mut E, config: &SearchConfig<GridChase>, seed: u64)
where
    E: AdversarialSearch<GridChase> + ?Sized,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GridChase::new();

    println!("== {} ==", engine.name());

    for turn in 0..MAX_TURNS {
        if game.is_terminal() {
            break;
        }

        let action = match engine.choose_action(&game, config) {
            Ok(action) => action,
            Err(e) => {
                println!("search failed: {}", e);
                return;
            }
        };
        game = game.successor(0, &action);

        for chaser in 1..game.num_agents() {
            if game.is_terminal() {
                break;
            }
            let moves = game.legal_actions(chaser);
            if let Some(m) = moves.choose(&mut rng) {
                game = game.successor(chaser, m);
            }
        }

        if turn % 10 == 0 {
            println!("Turn {}: collector plays {:?}", turn, action);
            println!("{}", game);
        }
    }

    let result = if game.is_win() {
        "cleared the board"
    } else if game.is_lose() {
        "was caught"
    } else {
        "ran out of turns"
    };
    println!("{} {} with score {}", engine.name(), result, game.score());
    println!("{}\n", engine.statistics().summary());
}

fn main() {
    // Initialize logging
    env_logger::init();

    println!("Adversarial Search Grid Chase Example");
    println!("=====================================");
    println!();

    let registry = EvaluationRegistry::<GridChase>::spatial();
    let config = match SearchConfig::from_registry(&registry, "better", 2) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            return;
        }
    };

    let mut engines: Vec<Box<dyn AdversarialSearch<GridChase>>> = vec![
        Box::new(Minimax::new()),
        Box::new(AlphaBeta::new()),
        Box::new(Expectimax::new()),
    ];

    for (i, engine) in engines.iter_mut().enumerate() {
        play(engine.as_mut(), &config, i as u64);
    }

    println!("Available evaluation functions: {:?}", registry.names());
}
