use quarry_core::{
    Comparison, Dialect, OrderBy, Ordering, Predicate, Projection, QueryDescriptor, QuarryError,
    Record, Value,
    compile::{
        compile, compile_assignment, compile_insertion, compile_join, compile_ordering,
        compile_predicate, compile_projection,
    },
    helpers,
};
use serde_json::json;

fn mysql(sql: &quarry_core::SQL<'_>) -> String {
    sql.render(Dialect::MySQL)
}

#[test]
fn test_flat_literal_predicate() {
    let predicate = Predicate::new().field("status", "open").field("priority", 2);
    assert_eq!(
        compile_predicate(&predicate).to_string(),
        r#"WHERE "status" = 'open' AND "priority" = 2"#
    );
}

#[test]
fn test_boolean_and_null_literals() {
    let predicate = Predicate::new()
        .field("active", true)
        .field("deletedAt", Value::Null);
    assert_eq!(
        compile_predicate(&predicate).to_string(),
        r#"WHERE "active" = TRUE AND "deletedAt" IS NULL"#
    );
}

#[test]
fn test_operator_resolution() {
    let predicate = Predicate::new().field("price", Comparison::Gt(Value::from(100)));
    assert_eq!(
        compile_predicate(&predicate).to_string(),
        r#"WHERE "price" > 100"#
    );

    let predicate = Predicate::new()
        .field(
            "price",
            vec![
                Comparison::Gte(Value::from(10)),
                Comparison::Lte(Value::from(20)),
            ],
        )
        .field("name", Comparison::Ne(Value::from("x")));
    assert_eq!(
        mysql(&compile_predicate(&predicate)),
        "WHERE `price` >= 10 AND `price` <= 20 AND `name` <> 'x'"
    );
}

#[test]
fn test_every_comparison_symbol() {
    let cases = [
        (Comparison::Eq(1.into()), "="),
        (Comparison::Ne(1.into()), "<>"),
        (Comparison::Gt(1.into()), ">"),
        (Comparison::Gte(1.into()), ">="),
        (Comparison::Lt(1.into()), "<"),
        (Comparison::Lte(1.into()), "<="),
    ];
    for (comparison, symbol) in cases {
        let predicate = Predicate::new().field("n", comparison);
        assert_eq!(
            compile_predicate(&predicate).to_string(),
            format!(r#"WHERE "n" {symbol} 1"#)
        );
    }
}

#[test]
fn test_empty_predicate_matches_all() {
    assert_eq!(compile_predicate(&Predicate::new()).to_string(), "WHERE TRUE");
}

#[test]
fn test_raw_predicate_is_verbatim() {
    let predicate = Predicate::raw("age > 3 OR name = 'bob'");
    assert_eq!(
        compile_predicate(&predicate).to_string(),
        "WHERE age > 3 OR name = 'bob'"
    );

    let predicate = predicate.field("id", Comparison::Lt(Value::from(9)));
    assert_eq!(
        compile_predicate(&predicate).to_string(),
        r#"WHERE (age > 3 OR name = 'bob') AND "id" < 9"#
    );
}

#[test]
fn test_projection() {
    assert_eq!(compile_projection(&Projection::new()).to_string(), "*");

    let projection = Projection::new()
        .include("id")
        .exclude("password")
        .include("name");
    assert_eq!(mysql(&compile_projection(&projection)), "`id`, `name`");
}

#[test]
fn test_ordering_preserves_order() {
    let ordering = Ordering::new().desc("createdAt").asc("id");
    assert_eq!(
        compile_ordering(&ordering).unwrap().to_string(),
        r#"ORDER BY "createdAt" DESC, "id" ASC"#
    );
    assert!(compile_ordering(&Ordering::new()).is_none());
}

#[test]
fn test_insertion_synthesizes_timestamps() {
    let record = Record::new().set("name", "a").set("age", 3);
    let insertion = compile_insertion(&record);
    assert_eq!(
        mysql(&insertion.keys),
        "(`name`, `age`, `createdAt`, `updatedAt`)"
    );
    assert_eq!(
        mysql(&insertion.values),
        "('a', 3, CURRENT_TIMESTAMP(), CURRENT_TIMESTAMP())"
    );
}

#[test]
fn test_assignment_appends_updated_at() {
    let record = Record::new().set("name", "b");
    assert_eq!(
        compile_assignment(&record).to_string(),
        r#"SET "name" = 'b', "updatedAt" = CURRENT_TIMESTAMP"#
    );
}

#[test]
fn test_join_chains_pairs() {
    let pairs = ["id:userId", "tenant:tenant"];
    let join = compile_join("users", "posts", &pairs).unwrap();
    assert_eq!(
        join.to_string(),
        r#"INNER JOIN "posts" ON "users"."id" = "posts"."userId" AND "users"."tenant" = "posts"."tenant""#
    );
}

#[test]
fn test_join_requires_pairs() {
    let pairs: [&str; 0] = [];
    assert!(matches!(
        compile_join("users", "posts", &pairs),
        Err(QuarryError::InvalidJoinSpec)
    ));
    assert!(matches!(
        compile_join("users", "posts", &["idonly"]),
        Err(QuarryError::MalformedJoinPair(_))
    ));
    assert!(matches!(
        compile_join("users", "", &["id:id"]),
        Err(QuarryError::MissingJoinTable)
    ));
}

#[test]
fn test_select_statement_order() {
    let descriptor = QueryDescriptor::new()
        .projection(Projection::new().include("id"))
        .predicate(Predicate::new().field("status", "open"))
        .ordering(Ordering::new().asc("id"))
        .limit(5)
        .offset(10);
    let pairs = ["id:userId"];
    let clauses = compile(&descriptor);
    let join = compile_join("users", "posts", &pairs).unwrap();
    let sql = helpers::select("users", &clauses, Some(join));
    assert_eq!(
        sql.to_string(),
        r#"SELECT "id" FROM "users" INNER JOIN "posts" ON "users"."id" = "posts"."userId" WHERE "status" = 'open' ORDER BY "id" ASC LIMIT 5 OFFSET 10"#
    );
}

#[test]
fn test_delete_and_update_skip_offset() {
    let descriptor = QueryDescriptor::new()
        .predicate(Predicate::new().field("id", 1))
        .offset(3);
    let record = Record::new().set("name", "c");
    let clauses = compile(&descriptor);
    assert_eq!(
        helpers::delete("users", &clauses).to_string(),
        r#"DELETE FROM "users" WHERE "id" = 1"#
    );

    assert_eq!(
        helpers::update("users", compile_assignment(&record), &clauses).to_string(),
        r#"UPDATE "users" SET "name" = 'c', "updatedAt" = CURRENT_TIMESTAMP WHERE "id" = 1"#
    );
}

#[test]
fn test_insert_statement() {
    let record = Record::new().set("name", "a");
    let sql = helpers::insert("users", compile_insertion(&record));
    assert_eq!(
        sql.to_string(),
        r#"INSERT INTO "users" ("name", "createdAt", "updatedAt") VALUES ('a', CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)"#
    );
}

#[test]
fn test_json_descriptor_compiles_like_typed() {
    let from_json = QueryDescriptor::from_json(&json!({
        "where": {"status": "open", "price": {"$gt": 100}},
        "order": {"id": false},
        "limit": 2,
    }))
    .unwrap();
    let typed = QueryDescriptor::new()
        .predicate(
            Predicate::new()
                .field("status", "open")
                .field("price", Comparison::Gt(Value::from(100))),
        )
        .ordering(Ordering {
            fields: vec![("id".into(), OrderBy::Desc)],
        })
        .limit(2);
    assert_eq!(compile(&from_json), compile(&typed));
}
