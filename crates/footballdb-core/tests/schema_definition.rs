use footballdb_core::{
    Entity, FOOTBALL_SCHEMA, FkAction, dependency_order, table_def, validate_definition,
};

#[test]
fn seeding_order_matches_foreign_key_order() {
    validate_definition(FOOTBALL_SCHEMA).expect("schema validates");
    let report = dependency_order(FOOTBALL_SCHEMA);

    let ranks: Vec<usize> = Entity::ALL
        .iter()
        .map(|entity| report.rank(entity.table()).expect("entity table present"))
        .collect();

    assert!(ranks[0] < ranks[1], "teams before players");
    assert!(ranks[0] < ranks[2], "teams before matches");
    assert!(ranks[1] < ranks[3] && ranks[2] < ranks[3], "stats last");
}

#[test]
fn schema_serializes_foreign_key_actions() {
    let matches = table_def("matches").expect("matches table");
    let json = serde_json::to_value(matches).expect("serialize table");

    let actions: Vec<&str> = json["foreign_keys"]
        .as_array()
        .expect("foreign keys array")
        .iter()
        .map(|fk| fk["on_delete"].as_str().expect("action"))
        .collect();
    assert_eq!(actions, vec!["cascade", "cascade"]);

    let player = table_def("player").expect("player table");
    assert_eq!(player.foreign_keys[0].on_delete, FkAction::SetNull);
}
