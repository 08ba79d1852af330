use pretty_assertions::assert_eq;
use tictac::selfplay::{generate_games, read_records, write_records, GameRecord, SelfPlayParams};

#[test]
fn write_and_read_records() {
    let params = SelfPlayParams { games: 3, seed: 123, random_opening: 2, ..SelfPlayParams::default() };
    let games = generate_games(&params).unwrap();
    let path = std::path::Path::new("target/selfplay_test/games.jsonl");
    write_records(path, &games).unwrap();
    let back = read_records(path).unwrap();
    assert_eq!(back, games);
}

#[test]
fn record_json_shape() {
    let rec = GameRecord { moves: vec![4, 0, 8], winner: None };
    assert_eq!(serde_json::to_string(&rec).unwrap(), r#"{"moves":[4,0,8],"winner":null}"#);
    let won: GameRecord = serde_json::from_str(r#"{"moves":[0,3,1,4,2],"winner":0}"#).unwrap();
    assert_eq!(won.winner, Some(0));
}

#[test]
fn malformed_line_is_invalid_data() {
    let path = std::path::Path::new("target/selfplay_test/bad.jsonl");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "{\"moves\":[1]}\nnot json\n").unwrap();
    let err = read_records(path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
