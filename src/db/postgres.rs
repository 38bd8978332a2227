use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool, Postgres, QueryBuilder};

use crate::{
    db::store::{ArtworkStore, CandidateOrder, EligibleArtworkFilter},
    error::AppResult,
    models::{ArtworkStatus, ArtworkSummary},
};

/// Creates a PostgreSQL connection pool
///
/// Establishes a pool of database connections for efficient reuse.
/// The pool automatically manages connection lifecycle and limits.
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

const SELECT_COLUMNS: &str =
    "SELECT id, tags, category, owner_id, liker_ids, view_count, is_public, status, created_at \
     FROM artworks";

/// Row shape for the artworks table
#[derive(Debug, sqlx::FromRow)]
struct ArtworkRow {
    id: String,
    tags: Vec<String>,
    category: String,
    owner_id: String,
    liker_ids: Vec<String>,
    view_count: i64,
    is_public: bool,
    status: String,
    created_at: DateTime<Utc>,
}

impl From<ArtworkRow> for ArtworkSummary {
    fn from(row: ArtworkRow) -> Self {
        ArtworkSummary {
            id: row.id,
            tags: row.tags,
            category: row.category,
            owner_id: row.owner_id,
            liker_ids: row.liker_ids,
            view_count: row.view_count,
            is_public: row.is_public,
            status: ArtworkStatus::from_store(&row.status),
            created_at: row.created_at,
        }
    }
}

/// Production `ArtworkStore` over Postgres
#[derive(Clone)]
pub struct PgArtworkStore {
    pool: PgPool,
}

impl PgArtworkStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ArtworkStore for PgArtworkStore {
    async fn find_artworks_by_liker(&self, user_id: &str) -> AppResult<Vec<ArtworkSummary>> {
        let sql = format!("{} WHERE $1 = ANY(liker_ids)", SELECT_COLUMNS);
        let rows: Vec<ArtworkRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ArtworkSummary::from).collect())
    }

    async fn find_eligible_artworks(
        &self,
        filter: EligibleArtworkFilter,
    ) -> AppResult<Vec<ArtworkSummary>> {
        let has_match_conditions = !filter.matches_everything();

        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_COLUMNS);
        query.push(" WHERE is_public AND status = 'published'");

        if !filter.exclude_ids.is_empty() {
            query.push(" AND NOT (id = ANY(");
            query.push_bind(filter.exclude_ids);
            query.push("))");
        }

        // The three match conditions are OR-ed: any matching tag, category,
        // or liker qualifies an artwork. `&&` is array overlap.
        if has_match_conditions {
            query.push(" AND (tags && ");
            query.push_bind(filter.any_tags);
            query.push(" OR category = ANY(");
            query.push_bind(filter.any_categories);
            query.push(") OR liker_ids && ");
            query.push_bind(filter.liked_by_any);
            query.push(")");
        }

        if filter.order == CandidateOrder::ByPopularity {
            query.push(" ORDER BY cardinality(liker_ids) DESC, view_count DESC");
        }

        query.push(" LIMIT ");
        query.push_bind(filter.limit as i64);

        let rows: Vec<ArtworkRow> = query.build_query_as().fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(ArtworkSummary::from).collect())
    }
}
