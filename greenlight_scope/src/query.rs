//! A minimal composable query value.
//!
//! The scope builder does not execute queries; it hands the storage
//! collaborator a restricted query value supporting the two operations
//! row-level scoping needs: OR-composition of visibility predicates and
//! JOIN injection. The structured form is the contract; `to_sql` renders
//! it deterministically for tests and for storage layers that consume
//! SQL text with positional binds.

use serde::Serialize;
use uuid::Uuid;

/// One visibility predicate. Predicates added to a query are OR'd
/// together: each one widens what the actor may see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Predicate {
    /// `column IN (set of UUIDs)`
    UuidIn {
        column: &'static str,
        values: Vec<Uuid>,
    },
    /// `column IN (set of strings)`
    TextIn {
        column: &'static str,
        values: Vec<String>,
    },
    /// `column && ARRAY[set of UUIDs]` — array-membership overlap.
    ArrayOverlaps {
        column: &'static str,
        values: Vec<Uuid>,
    },
}

/// An injected inner join, `JOIN table ON left = right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Join {
    pub table: &'static str,
    pub left: &'static str,
    pub right: &'static str,
}

/// A bind parameter accompanying the rendered SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Uuid(Uuid),
    Text(String),
}

/// A base query over one table, plus the joins and OR'd restrictions
/// the scope builder has attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    table: &'static str,
    joins: Vec<Join>,
    restrictions: Vec<Predicate>,
}

impl Query {
    /// A base query selecting every row of `table`. Note that an
    /// unrestricted query is only legal to execute when the scope
    /// builder said so; see `scope_or_deny`.
    pub fn select(table: &'static str) -> Self {
        Self {
            table,
            joins: Vec::new(),
            restrictions: Vec::new(),
        }
    }

    /// The table this query selects from.
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// The restrictions attached so far.
    pub fn restrictions(&self) -> &[Predicate] {
        &self.restrictions
    }

    /// Whether any restriction has been attached.
    pub fn is_restricted(&self) -> bool {
        !self.restrictions.is_empty()
    }

    /// OR another visibility predicate into the query.
    pub fn or_where(&mut self, predicate: Predicate) {
        self.restrictions.push(predicate);
    }

    /// Inject a join, once; repeated injections of the same join are
    /// collapsed so several predicates can share it.
    pub fn join(&mut self, join: Join) {
        if !self.joins.contains(&join) {
            self.joins.push(join);
        }
    }

    /// Render to SQL text with positional binds (`$1`, `$2`, ...).
    ///
    /// Rendering is deterministic as long as predicate value sets are
    /// built in a stable order, which the scope builder guarantees by
    /// collecting them through ordered sets.
    pub fn to_sql(&self) -> (String, Vec<Param>) {
        let mut sql = format!("SELECT {table}.* FROM {table}", table = self.table);
        let mut params = Vec::new();

        for join in &self.joins {
            sql.push_str(&format!(
                " JOIN {} ON {} = {}",
                join.table, join.left, join.right
            ));
        }

        if self.restrictions.is_empty() {
            return (sql, params);
        }

        sql.push_str(" WHERE ");
        for (i, predicate) in self.restrictions.iter().enumerate() {
            if i > 0 {
                sql.push_str(" OR ");
            }
            sql.push('(');
            sql.push_str(&render_predicate(predicate, &mut params));
            sql.push(')');
        }
        (sql, params)
    }
}

fn render_predicate(predicate: &Predicate, params: &mut Vec<Param>) -> String {
    match predicate {
        Predicate::UuidIn { column, values } => {
            let placeholders = push_params(params, values.iter().map(|v| Param::Uuid(*v)));
            format!("{column} IN ({placeholders})")
        }
        Predicate::TextIn { column, values } => {
            let placeholders = push_params(params, values.iter().map(|v| Param::Text(v.clone())));
            format!("{column} IN ({placeholders})")
        }
        Predicate::ArrayOverlaps { column, values } => {
            let placeholders = push_params(params, values.iter().map(|v| Param::Uuid(*v)));
            format!("{column} && ARRAY[{placeholders}]::uuid[]")
        }
    }
}

fn push_params(params: &mut Vec<Param>, values: impl Iterator<Item = Param>) -> String {
    let mut placeholders = Vec::new();
    for value in values {
        params.push(value);
        placeholders.push(format!("${}", params.len()));
    }
    placeholders.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_query_renders_unrestricted() {
        let (sql, params) = Query::select("assets").to_sql();
        assert_eq!(sql, "SELECT assets.* FROM assets");
        assert!(params.is_empty());
    }

    #[test]
    fn or_composition_renders_parenthesized() {
        let mut q = Query::select("assets");
        q.or_where(Predicate::TextIn {
            column: "assets.country",
            values: vec!["Latvia".into()],
        });
        let owner = Uuid::new_v4();
        q.or_where(Predicate::UuidIn {
            column: "assets.owner_id",
            values: vec![owner],
        });

        let (sql, params) = q.to_sql();
        assert_eq!(
            sql,
            "SELECT assets.* FROM assets WHERE (assets.country IN ($1)) OR (assets.owner_id IN ($2))"
        );
        assert_eq!(params, vec![Param::Text("Latvia".into()), Param::Uuid(owner)]);
    }

    #[test]
    fn array_overlap_renders_postgres_operator() {
        let id = Uuid::new_v4();
        let mut q = Query::select("projects");
        q.or_where(Predicate::ArrayOverlaps {
            column: "projects.consortium_orgs",
            values: vec![id],
        });

        let (sql, params) = q.to_sql();
        assert_eq!(
            sql,
            "SELECT projects.* FROM projects WHERE (projects.consortium_orgs && ARRAY[$1]::uuid[])"
        );
        assert_eq!(params, vec![Param::Uuid(id)]);
    }

    #[test]
    fn duplicate_joins_collapse() {
        let join = Join {
            table: "assets",
            left: "projects.asset",
            right: "assets.id",
        };
        let mut q = Query::select("projects");
        q.join(join);
        q.join(join);

        let (sql, _) = q.to_sql();
        assert_eq!(
            sql,
            "SELECT projects.* FROM projects JOIN assets ON projects.asset = assets.id"
        );
    }

    #[test]
    fn placeholders_number_across_predicates() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut q = Query::select("organizations");
        q.or_where(Predicate::TextIn {
            column: "organizations.country",
            values: vec!["Latvia".into(), "Bulgaria".into()],
        });
        q.or_where(Predicate::UuidIn {
            column: "organizations.id",
            values: vec![a, b],
        });

        let (sql, params) = q.to_sql();
        assert!(sql.contains("organizations.country IN ($1, $2)"));
        assert!(sql.contains("organizations.id IN ($3, $4)"));
        assert_eq!(params.len(), 4);
    }
}
