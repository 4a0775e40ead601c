use adversarial_search::{
    AdversarialSearch, AlphaBeta, GameTree, Minimax, SearchConfig, SearchEngine, ScoreEvaluation,
    TreeNode,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn config(depth: usize) -> SearchConfig<GameTree> {
    SearchConfig::new(depth, ScoreEvaluation).unwrap()
}

fn textbook_tree() -> GameTree {
    GameTree::new(
        TreeNode::branch(vec![
            TreeNode::leaves(&[3.0, 12.0, 8.0]),
            TreeNode::leaves(&[2.0, 4.0, 6.0]),
            TreeNode::leaves(&[14.0, 5.0, 2.0]),
        ]),
        2,
    )
}

fn random_tree(seed: u64, height: usize, branching: usize, num_agents: usize) -> GameTree {
    let mut rng = StdRng::seed_from_u64(seed);
    let tree = TreeNode::uniform(height, branching, &mut |_: usize| rng.gen_range(-100.0..100.0));
    GameTree::new(tree, num_agents)
}

#[test]
fn test_alpha_beta_prunes_textbook_tree() {
    let mut alpha_beta = AlphaBeta::new();
    let outcome = alpha_beta.search(&textbook_tree(), &config(1)).unwrap();

    assert_eq!(outcome.action, 0);
    assert_eq!(outcome.value, 3.0);

    // The second reply is cut after its first leaf (2 < 3) and the third
    // after its last (2 < 3).
    let stats = alpha_beta.statistics();
    assert_eq!(stats.nodes_expanded, 10);
    assert_eq!(stats.cutoffs, 2);
}

#[test]
fn test_alpha_beta_visits_fewer_nodes_than_minimax() {
    let state = textbook_tree();

    let mut minimax = Minimax::seeded(0);
    let mut alpha_beta = AlphaBeta::new();
    let full = minimax.search(&state, &config(1)).unwrap();
    let pruned = alpha_beta.search(&state, &config(1)).unwrap();

    assert_eq!(full, pruned);
    assert!(alpha_beta.statistics().nodes_expanded < minimax.statistics().nodes_expanded);
}

#[test]
fn test_alpha_beta_agrees_with_minimax_on_random_trees() {
    for seed in 0..20 {
        for &num_agents in &[1usize, 2, 3] {
            let state = random_tree(seed, 5, 3, num_agents);
            let config = config(5);

            let mut minimax = Minimax::seeded(seed);
            let mut alpha_beta = AlphaBeta::new();

            let expected = minimax.search(&state, &config).unwrap();
            let actual = alpha_beta.search(&state, &config).unwrap();

            assert_eq!(
                expected, actual,
                "seed {} with {} agents disagreed",
                seed, num_agents
            );
            assert!(
                alpha_beta.statistics().nodes_expanded <= minimax.statistics().nodes_expanded
            );
        }
    }
}

#[test]
fn test_alpha_beta_state_value_matches_minimax() {
    for seed in 100..110 {
        let state = random_tree(seed, 4, 4, 2);

        let mut minimax = Minimax::seeded(seed);
        let mut alpha_beta = AlphaBeta::new();

        assert_eq!(
            minimax.state_value(&state, &config(2)).unwrap(),
            alpha_beta.state_value(&state, &config(2)).unwrap()
        );
    }
}

#[test]
fn test_alpha_beta_prunes_on_larger_trees() {
    let state = random_tree(7, 6, 4, 2);

    let mut minimax = Minimax::seeded(7);
    let mut alpha_beta = AlphaBeta::new();
    minimax.search(&state, &config(3)).unwrap();
    alpha_beta.search(&state, &config(3)).unwrap();

    assert!(alpha_beta.statistics().cutoffs > 0);
    assert!(alpha_beta.statistics().nodes_expanded < minimax.statistics().nodes_expanded);
}

#[test]
fn test_alpha_beta_ties_keep_first_action() {
    let state = GameTree::new(
        TreeNode::branch(vec![
            TreeNode::leaves(&[1.0, 4.0]),
            TreeNode::leaves(&[5.0, 7.0]),
            TreeNode::leaves(&[5.0, 9.0]),
        ]),
        2,
    );

    let mut alpha_beta = AlphaBeta::new();
    for _ in 0..10 {
        let outcome = alpha_beta.search(&state, &config(1)).unwrap();
        assert_eq!(outcome.action, 1);
        assert_eq!(outcome.value, 5.0);
    }
}

#[test]
fn test_alpha_beta_equal_values_at_bound_are_not_pruned() {
    // The second reply's first leaf equals alpha (3). Strict pruning keeps
    // exploring it, finds nothing better for the adversary, and still
    // reports the tie without replacing the first action.
    let state = GameTree::new(
        TreeNode::branch(vec![
            TreeNode::leaves(&[3.0, 6.0]),
            TreeNode::leaves(&[3.0, 4.0]),
        ]),
        2,
    );

    let mut alpha_beta = AlphaBeta::new();
    let outcome = alpha_beta.search(&state, &config(1)).unwrap();

    assert_eq!(outcome.action, 0);
    assert_eq!(outcome.value, 3.0);
    assert_eq!(alpha_beta.statistics().nodes_expanded, 6);
    assert_eq!(alpha_beta.statistics().cutoffs, 0);
}
