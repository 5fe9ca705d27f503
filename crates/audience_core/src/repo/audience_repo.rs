//! Audience repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Create, update, read, list and delete saved audiences.
//! - Store the bucket snapshot as JSON and tags as ordered rows.
//!
//! # Invariants
//! - Writes replace the whole tag list in the same transaction.
//! - Listing is deterministic: `updated_at DESC, id ASC`.
//! - `updated_at` never moves backwards on update.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::audience::{Audience, AudienceId, AudienceSnapshot};
use log::warn;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row, Transaction, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const AUDIENCES_DEFAULT_LIMIT: u32 = 20;
const AUDIENCES_LIMIT_MAX: u32 = 100;

const AUDIENCE_SELECT_SQL: &str = "SELECT
    id,
    name,
    home_page_url,
    snapshot_json,
    created_at,
    updated_at
FROM audiences";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for audience persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(AudienceId),
    /// Snapshot could not be serialized for storage.
    Encode(serde_json::Error),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "audience not found: {id}"),
            Self::Encode(err) => write!(f, "failed to encode audience snapshot: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "audience repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted audience data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Write model; timestamps are owned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct AudienceDraft {
    pub id: AudienceId,
    pub name: String,
    pub tags: Vec<String>,
    pub home_page_url: Option<String>,
    pub snapshot: AudienceSnapshot,
}

/// Listing options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudienceListQuery {
    /// Optional exact tag filter.
    pub tag: Option<String>,
    /// Maximum rows. Defaults to 20 and clamps to 100.
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Storage contract for saved audiences.
pub trait AudienceRepository {
    fn insert_audience(&self, draft: &AudienceDraft) -> RepoResult<AudienceId>;
    /// Replaces every field of an existing audience.
    fn update_audience(&self, draft: &AudienceDraft) -> RepoResult<()>;
    fn get_audience(&self, id: AudienceId) -> RepoResult<Option<Audience>>;
    fn list_audiences(&self, query: &AudienceListQuery) -> RepoResult<Vec<Audience>>;
    fn delete_audience(&self, id: AudienceId) -> RepoResult<()>;
}

/// SQLite-backed audience repository.
pub struct SqliteAudienceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAudienceRepository<'conn> {
    /// Wraps a connection returned by `open_db` / `open_db_in_memory`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl AudienceRepository for SqliteAudienceRepository<'_> {
    fn insert_audience(&self, draft: &AudienceDraft) -> RepoResult<AudienceId> {
        let snapshot_json = encode_snapshot(&draft.snapshot)?;
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        tx.execute(
            "INSERT INTO audiences (id, name, home_page_url, snapshot_json)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                draft.id.to_string(),
                draft.name.as_str(),
                draft.home_page_url.as_deref(),
                snapshot_json,
            ],
        )?;
        replace_tags(&tx, draft.id, &draft.tags)?;
        tx.commit()?;
        Ok(draft.id)
    }

    fn update_audience(&self, draft: &AudienceDraft) -> RepoResult<()> {
        let snapshot_json = encode_snapshot(&draft.snapshot)?;
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            "UPDATE audiences
             SET
                name = ?2,
                home_page_url = ?3,
                snapshot_json = ?4,
                updated_at = MAX(updated_at, strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![
                draft.id.to_string(),
                draft.name.as_str(),
                draft.home_page_url.as_deref(),
                snapshot_json,
            ],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(draft.id));
        }
        replace_tags(&tx, draft.id, &draft.tags)?;
        tx.commit()?;
        Ok(())
    }

    fn get_audience(&self, id: AudienceId) -> RepoResult<Option<Audience>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUDIENCE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let mut audience = parse_audience_row(row)?;
        audience.tags = load_tags(self.conn, audience.id)?;
        Ok(Some(audience))
    }

    fn list_audiences(&self, query: &AudienceListQuery) -> RepoResult<Vec<Audience>> {
        let mut sql = format!("{AUDIENCE_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(tag) = query.tag.as_deref() {
            sql.push_str(
                " AND EXISTS (
                    SELECT 1 FROM audience_tags
                    WHERE audience_tags.audience_id = audiences.id
                      AND audience_tags.tag = ?
                )",
            );
            bind_values.push(Value::Text(tag.to_string()));
        }

        sql.push_str(" ORDER BY updated_at DESC, id ASC LIMIT ? OFFSET ?");
        bind_values.push(Value::Integer(i64::from(normalize_list_limit(query.limit))));
        bind_values.push(Value::Integer(i64::from(query.offset)));

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut audiences = Vec::new();
        while let Some(row) = rows.next()? {
            audiences.push(parse_audience_row(row)?);
        }

        for audience in &mut audiences {
            audience.tags = load_tags(self.conn, audience.id)?;
        }
        Ok(audiences)
    }

    fn delete_audience(&self, id: AudienceId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM audiences WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

/// Effective page size for a requested limit.
pub fn normalize_list_limit(limit: Option<u32>) -> u32 {
    limit
        .unwrap_or(AUDIENCES_DEFAULT_LIMIT)
        .clamp(1, AUDIENCES_LIMIT_MAX)
}

fn encode_snapshot(snapshot: &AudienceSnapshot) -> RepoResult<String> {
    serde_json::to_string(snapshot).map_err(RepoError::Encode)
}

/// Decodes a stored snapshot; undecodable payloads become empty buckets.
fn decode_snapshot(id: AudienceId, raw: &str) -> AudienceSnapshot {
    match serde_json::from_str::<AudienceSnapshot>(raw) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(
                "event=snapshot_decode module=repo status=error audience_id={} error={}",
                id, err
            );
            AudienceSnapshot::empty()
        }
    }
}

fn replace_tags(tx: &Transaction<'_>, id: AudienceId, tags: &[String]) -> RepoResult<()> {
    let id_text = id.to_string();
    tx.execute(
        "DELETE FROM audience_tags WHERE audience_id = ?1;",
        [id_text.as_str()],
    )?;
    for (position, tag) in tags.iter().enumerate() {
        tx.execute(
            "INSERT INTO audience_tags (audience_id, position, tag) VALUES (?1, ?2, ?3);",
            params![id_text, position as i64, tag.as_str()],
        )?;
    }
    Ok(())
}

fn load_tags(conn: &Connection, id: AudienceId) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT tag FROM audience_tags WHERE audience_id = ?1 ORDER BY position ASC;",
    )?;
    let tags = stmt
        .query_map([id.to_string()], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tags)
}

fn parse_audience_row(row: &Row<'_>) -> RepoResult<Audience> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid audience id `{id_text}`")))?;
    let snapshot_json: String = row.get("snapshot_json")?;

    Ok(Audience {
        id,
        name: row.get("name")?,
        tags: Vec::new(),
        home_page_url: row.get("home_page_url")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        snapshot: decode_snapshot(id, &snapshot_json),
    })
}
