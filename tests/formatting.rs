use flappy::systems::ScoreResource;
use pretty_assertions::assert_eq;

#[test]
fn test_whole_scores_have_no_fraction() {
    assert_eq!(ScoreResource(0.0).to_string(), "0");
    assert_eq!(ScoreResource(1.0).to_string(), "1");
    assert_eq!(ScoreResource(42.0).to_string(), "42");
}

#[test]
fn test_half_points_show_one_decimal() {
    assert_eq!(ScoreResource(0.5).to_string(), "0.5");
    assert_eq!(ScoreResource(12.5).to_string(), "12.5");
}

#[test]
fn test_pipes_accumulate_half_points() {
    let mut score = ScoreResource::default();
    for _ in 0..5 {
        score.add_pipe();
    }
    assert_eq!(score, ScoreResource(2.5));
    assert_eq!(score.to_string(), "2.5");
}
