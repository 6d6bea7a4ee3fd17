/// Implements [`Store`](crate::store::Store) for a struct holding `pool` and
/// `statements` fields.
///
/// Both adapters speak the same SQL apart from placeholders and column types,
/// which [`Statements`](crate::ddl::Statements) already renders per dialect, so
/// only the pool and row types differ between them.
macro_rules! sql_store {
    ($store:ident, $row:ty, $dialect:expr) => {
        mod rows {
            use footballdb_core::{
                Match, MatchId, Player, PlayerId, PlayerMatchStat, Position, Team, TeamId,
            };
            use sqlx::Row;

            pub(super) fn team(row: &$row) -> Result<Team, sqlx::Error> {
                Ok(Team {
                    team_id: TeamId(row.try_get("team_id")?),
                    team_name: row.try_get("team_name")?,
                    city: row.try_get("city")?,
                    stadium: row.try_get("stadium")?,
                })
            }

            pub(super) fn player(row: &$row) -> Result<Player, sqlx::Error> {
                let position: Option<String> = row.try_get("position")?;
                let position = position
                    .map(|value| value.parse::<Position>())
                    .transpose()
                    .map_err(|err| sqlx::Error::ColumnDecode {
                        index: "position".to_string(),
                        source: Box::new(err),
                    })?;
                let team_id: Option<i64> = row.try_get("team_id")?;

                Ok(Player {
                    player_id: PlayerId(row.try_get("player_id")?),
                    first_name: row.try_get("first_name")?,
                    last_name: row.try_get("last_name")?,
                    position,
                    date_of_birth: row.try_get("date_of_birth")?,
                    nationality: row.try_get("nationality")?,
                    team_id: team_id.map(TeamId),
                })
            }

            pub(super) fn match_row(row: &$row) -> Result<Match, sqlx::Error> {
                Ok(Match {
                    match_id: MatchId(row.try_get("match_id")?),
                    match_date: row.try_get("match_date")?,
                    home_team_id: TeamId(row.try_get("home_team_id")?),
                    away_team_id: TeamId(row.try_get("away_team_id")?),
                    stadium: row.try_get("stadium")?,
                    home_score: row.try_get("home_score")?,
                    away_score: row.try_get("away_score")?,
                })
            }

            pub(super) fn player_stat(row: &$row) -> Result<PlayerMatchStat, sqlx::Error> {
                Ok(PlayerMatchStat {
                    player_id: PlayerId(row.try_get("player_id")?),
                    match_id: MatchId(row.try_get("match_id")?),
                    goals: row.try_get("goals")?,
                    assists: row.try_get("assists")?,
                    yellow_cards: row.try_get("yellow_cards")?,
                    red_cards: row.try_get("red_cards")?,
                    minutes_played: row.try_get("minutes_played")?,
                })
            }
        }

        #[async_trait::async_trait]
        impl $crate::store::Store for $store {
            fn engine(&self) -> &'static str {
                $dialect.engine()
            }

            async fn ensure_schema(&self) -> $crate::error::StoreResult<()> {
                let statements = $crate::ddl::schema_statements($dialect)?;
                let mut tx = self.pool.begin().await?;
                for sql in &statements {
                    sqlx::query(sql).execute(&mut *tx).await?;
                }
                tx.commit().await?;
                tracing::debug!(
                    event = "schema_ensured",
                    engine = $dialect.engine(),
                    tables = statements.len()
                );
                Ok(())
            }

            async fn insert_team(
                &self,
                team: &footballdb_core::NewTeam,
            ) -> $crate::error::StoreResult<footballdb_core::TeamId> {
                let id: i64 = sqlx::query_scalar(&self.statements.insert_team)
                    .bind(team.team_name.as_str())
                    .bind(team.city.as_deref())
                    .bind(team.stadium.as_deref())
                    .fetch_one(&self.pool)
                    .await?;
                Ok(footballdb_core::TeamId(id))
            }

            async fn insert_player(
                &self,
                player: &footballdb_core::NewPlayer,
            ) -> $crate::error::StoreResult<footballdb_core::PlayerId> {
                let id: i64 = sqlx::query_scalar(&self.statements.insert_player)
                    .bind(player.first_name.as_str())
                    .bind(player.last_name.as_str())
                    .bind(player.position.map(footballdb_core::Position::as_str))
                    .bind(player.date_of_birth)
                    .bind(player.nationality.as_deref())
                    .bind(player.team_id.map(|id| id.0))
                    .fetch_one(&self.pool)
                    .await?;
                Ok(footballdb_core::PlayerId(id))
            }

            async fn insert_match(
                &self,
                row: &footballdb_core::NewMatch,
            ) -> $crate::error::StoreResult<footballdb_core::MatchId> {
                let id: i64 = sqlx::query_scalar(&self.statements.insert_match)
                    .bind(row.match_date)
                    .bind(row.home_team_id.0)
                    .bind(row.away_team_id.0)
                    .bind(row.stadium.as_deref())
                    .bind(row.home_score)
                    .bind(row.away_score)
                    .fetch_one(&self.pool)
                    .await?;
                Ok(footballdb_core::MatchId(id))
            }

            async fn insert_player_stat(
                &self,
                stat: &footballdb_core::PlayerMatchStat,
            ) -> $crate::error::StoreResult<()> {
                sqlx::query(&self.statements.insert_player_stat)
                    .bind(stat.player_id.0)
                    .bind(stat.match_id.0)
                    .bind(stat.goals)
                    .bind(stat.assists)
                    .bind(stat.yellow_cards)
                    .bind(stat.red_cards)
                    .bind(stat.minutes_played)
                    .execute(&self.pool)
                    .await?;
                Ok(())
            }

            async fn list_teams(
                &self,
            ) -> $crate::error::StoreResult<Vec<footballdb_core::Team>> {
                let fetched = sqlx::query(&self.statements.select_teams)
                    .fetch_all(&self.pool)
                    .await?;
                Ok(fetched.iter().map(rows::team).collect::<Result<Vec<_>, _>>()?)
            }

            async fn list_players(
                &self,
            ) -> $crate::error::StoreResult<Vec<footballdb_core::Player>> {
                let fetched = sqlx::query(&self.statements.select_players)
                    .fetch_all(&self.pool)
                    .await?;
                Ok(fetched.iter().map(rows::player).collect::<Result<Vec<_>, _>>()?)
            }

            async fn list_matches(
                &self,
            ) -> $crate::error::StoreResult<Vec<footballdb_core::Match>> {
                let fetched = sqlx::query(&self.statements.select_matches)
                    .fetch_all(&self.pool)
                    .await?;
                Ok(fetched.iter().map(rows::match_row).collect::<Result<Vec<_>, _>>()?)
            }

            async fn list_player_stats(
                &self,
            ) -> $crate::error::StoreResult<Vec<footballdb_core::PlayerMatchStat>> {
                let fetched = sqlx::query(&self.statements.select_player_stats)
                    .fetch_all(&self.pool)
                    .await?;
                Ok(fetched.iter().map(rows::player_stat).collect::<Result<Vec<_>, _>>()?)
            }

            async fn delete_team(
                &self,
                id: footballdb_core::TeamId,
            ) -> $crate::error::StoreResult<bool> {
                let result = sqlx::query(&self.statements.delete_team)
                    .bind(id.0)
                    .execute(&self.pool)
                    .await?;
                Ok(result.rows_affected() > 0)
            }

            async fn delete_player(
                &self,
                id: footballdb_core::PlayerId,
            ) -> $crate::error::StoreResult<bool> {
                let result = sqlx::query(&self.statements.delete_player)
                    .bind(id.0)
                    .execute(&self.pool)
                    .await?;
                Ok(result.rows_affected() > 0)
            }

            async fn delete_match(
                &self,
                id: footballdb_core::MatchId,
            ) -> $crate::error::StoreResult<bool> {
                let result = sqlx::query(&self.statements.delete_match)
                    .bind(id.0)
                    .execute(&self.pool)
                    .await?;
                Ok(result.rows_affected() > 0)
            }

            async fn close(&self) {
                self.pool.close().await;
            }
        }
    };
}

pub(crate) use sql_store;
