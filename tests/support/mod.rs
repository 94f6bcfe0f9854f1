//! A small Star Wars fixture shared by the integration tests, built the way
//! an embedder would: by hand, with the builder functions in
//! `graphql_engine::schema`, against a `Database` context.

use std::collections::HashMap;

use graphql_engine::ast::{AstValue, Document, Field as AstField, OperationDefinition, OperationType, Selection};
use graphql_engine::schema::{
    add_type, arg, arg_enum, arg_nullable, default_arg, field, id_arg, input_object, int, int_arg, interface,
    nullable, obj, string, string_arg, AbstractValue, Schema,
};
use graphql_engine::value::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Episode {
    NewHope,
    Empire,
    Jedi,
}

#[derive(Clone, Debug)]
pub struct Human {
    pub id: String,
    pub name: String,
    pub home_planet: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Droid {
    pub id: String,
    pub name: String,
    pub primary_function: String,
}

#[derive(Clone, Debug)]
pub struct Review {
    pub episode: String,
    pub stars: i64,
    pub commentary: Option<String>,
}

pub struct Database {
    pub humans: HashMap<String, Human>,
    pub droids: HashMap<String, Droid>,
}

impl Database {
    pub fn new() -> Self {
        let mut humans = HashMap::new();
        humans.insert(
            "1000".to_string(),
            Human { id: "1000".into(), name: "Luke Skywalker".into(), home_planet: Some("Tatooine".into()) },
        );
        let mut droids = HashMap::new();
        droids.insert(
            "2001".to_string(),
            Droid { id: "2001".into(), name: "R2-D2".into(), primary_function: "Astromech".into() },
        );
        Database { humans, droids }
    }

    pub fn hero(&self, episode: Option<Episode>) -> Option<HeroRef> {
        match episode {
            Some(Episode::NewHope) => self.droids.get("2001").map(|d| HeroRef::Droid(d.clone())),
            _ => self.humans.get("1000").map(|h| HeroRef::Human(h.clone())),
        }
    }
}

pub enum HeroRef {
    Human(Human),
    Droid(Droid),
}

fn episode_arg_type() -> graphql_engine::schema::ArgType<Episode> {
    arg_enum::<Episode>(
        "Episode",
        vec![("NEW_HOPE", Episode::NewHope), ("EMPIRE", Episode::Empire), ("JEDI", Episode::Jedi)],
    )
}

/// Build the fixture schema. Interface fields (`Character.id`/`Character.name`)
/// are never actually run — selections against an interface-typed field
/// resolve against the concrete object's own fields (see
/// `execution::resolve`), so these closures exist purely so the interface
/// has a field list to report through introspection.
pub fn build_schema() -> Schema<Database> {
    let character_ty = interface::<Database, _>("Character", |_self_ty| {
        vec![
            field::<Database, (), String, _>("id", string(), |_ctx, _src, _args| {
                unreachable!("Character.id is resolved against a concrete implementor")
            }),
            field::<Database, (), String, _>("name", string(), |_ctx, _src, _args| {
                unreachable!("Character.name is resolved against a concrete implementor")
            }),
        ]
    });

    let human_ty = obj::<Database, _>("Human", |_self_ty| {
        vec![
            field::<Database, Human, String, _>("id", string(), |_ctx, src, _args| Ok(src.id.clone())),
            field::<Database, Human, String, _>("name", string(), |_ctx, src, _args| Ok(src.name.clone())),
            field::<Database, Human, Option<String>, _>(
                "homePlanet",
                nullable::<Database, String>(string()),
                |_ctx, src, _args| Ok(src.home_planet.clone()),
            ),
        ]
    });

    let droid_ty = obj::<Database, _>("Droid", |_self_ty| {
        vec![
            field::<Database, Droid, String, _>("id", string(), |_ctx, src, _args| Ok(src.id.clone())),
            field::<Database, Droid, String, _>("name", string(), |_ctx, src, _args| Ok(src.name.clone())),
            field::<Database, Droid, String, _>("primaryFunction", string(), |_ctx, src, _args| {
                Ok(src.primary_function.clone())
            }),
        ]
    });

    let human_to_character = add_type::<Database, Human>(&character_ty, &human_ty);
    let droid_to_character = add_type::<Database, Droid>(&character_ty, &droid_ty);

    let query_ty = obj::<Database, _>("Query", move |_self_ty| {
        let human_to_character = human_to_character.clone();
        let droid_to_character = droid_to_character.clone();
        vec![
            field::<Database, (), Option<AbstractValue<Database>>, _>(
                "hero",
                nullable::<Database, AbstractValue<Database>>(character_ty.clone()),
                move |ctx, _src, args| {
                    let episode: Option<Episode> = args.get("episode");
                    Ok(ctx.hero(episode).map(|h| match h {
                        HeroRef::Human(h) => human_to_character(h),
                        HeroRef::Droid(d) => droid_to_character(d),
                    }))
                },
            )
            .argument(arg("episode", arg_nullable(episode_arg_type()))),
            field::<Database, (), Option<Human>, _>(
                "human",
                nullable::<Database, Human>(human_ty.clone()),
                |ctx, _src, args| {
                    let id: String = args.get("id");
                    Ok(ctx.humans.get(&id).cloned())
                },
            )
            .argument(arg("id", id_arg())),
            field::<Database, (), Option<Droid>, _>(
                "droid",
                nullable::<Database, Droid>(droid_ty.clone()),
                |ctx, _src, args| {
                    let id: String = args.get("id");
                    Ok(ctx.droids.get(&id).cloned())
                },
            )
            .argument(arg("id", id_arg())),
            field::<Database, (), String, _>("boom", string(), |_ctx, _src, _args| {
                Err("boom: resolver failed on purpose".to_string())
            }),
        ]
    });

    let review_ty = obj::<Database, _>("Review", |_self_ty| {
        vec![
            field::<Database, Review, String, _>("episode", string(), |_ctx, src, _args| Ok(src.episode.clone())),
            field::<Database, Review, i64, _>("stars", int(), |_ctx, src, _args| Ok(src.stars)),
            field::<Database, Review, Option<String>, _>(
                "commentary",
                nullable::<Database, String>(string()),
                |_ctx, src, _args| Ok(src.commentary.clone()),
            ),
        ]
    });

    let review_input = input_object::<(i64, Option<String>), _>(
        "ReviewInput",
        vec![
            arg("stars", int_arg()),
            default_arg("commentary", arg_nullable(string_arg()), String::new()),
        ],
        |args| Ok((args.get::<i64>("stars"), Some(args.get::<String>("commentary")).filter(|s| !s.is_empty()))),
    );

    let mutation_ty = obj::<Database, _>("Mutation", move |_self_ty| {
        let review_ty = review_ty.clone();
        vec![field::<Database, (), Review, _>("createReview", review_ty, move |_ctx, _src, args| {
            let episode: Episode = args.get("episode");
            let (stars, commentary) = args.get::<(i64, Option<String>)>("review");
            let episode_name = match episode {
                Episode::NewHope => "NEWHOPE",
                Episode::Empire => "EMPIRE",
                Episode::Jedi => "JEDI",
            };
            Ok(Review { episode: episode_name.to_string(), stars, commentary })
        })
        .argument(arg("episode", episode_arg_type()))
        .argument(arg("review", review_input))]
    });

    graphql_engine::schema::create(query_ty, Some(mutation_ty))
}

pub fn field_sel(name: &str, arguments: Vec<(&str, AstValue)>, selection_set: Vec<Selection>) -> Selection {
    Selection::Field(AstField {
        alias: None,
        name: name.to_string(),
        arguments: arguments.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        selection_set,
    })
}

pub fn aliased_field_sel(
    alias: &str,
    name: &str,
    arguments: Vec<(&str, AstValue)>,
    selection_set: Vec<Selection>,
) -> Selection {
    Selection::Field(AstField {
        alias: Some(alias.to_string()),
        name: name.to_string(),
        arguments: arguments.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        selection_set,
    })
}

pub fn query(selection_set: Vec<Selection>) -> Document {
    Document {
        definitions: vec![graphql_engine::ast::Definition::Operation(OperationDefinition {
            operation_type: OperationType::Query,
            name: None,
            variable_definitions: vec![],
            selection_set,
        })],
    }
}

pub fn mutation(selection_set: Vec<Selection>) -> Document {
    Document {
        definitions: vec![graphql_engine::ast::Definition::Operation(OperationDefinition {
            operation_type: OperationType::Mutation,
            name: None,
            variable_definitions: vec![],
            selection_set,
        })],
    }
}

/// Look up a key in a `Value::Map`, panicking with a useful message if the
/// value isn't a map or the key is absent.
pub fn get<'a>(value: &'a Value, key: &str) -> &'a Value {
    value
        .as_map()
        .unwrap_or_else(|| panic!("expected a map, got {:?}", value))
        .get(key)
        .unwrap_or_else(|| panic!("missing key `{}` in {:?}", key, value))
}
