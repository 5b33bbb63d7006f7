use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub target: String,

    // json encoded string lists
    #[sea_orm(column_type = "Text")]
    pub bad_guesses: String,
    #[sea_orm(column_type = "Text")]
    pub good_guesses: String,
    #[sea_orm(column_type = "Text")]
    pub history: String,

    pub status: String,
    pub misses_remaining: i32,
    pub game_over: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
