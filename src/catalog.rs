/*
 * evaluates every form once and keeps the verdicts in sqlite so they can be
 * queried by validity, figure or fallacy
 */
use std::collections::HashMap;

use log::{debug, info};
use rusqlite::types::ToSql;
use rusqlite::{params, Connection};

use crate::ast::{Fallacy, Figure, Form};
use crate::error::Result;
use crate::parser::parse_form;
use crate::syllogism::{evaluate_form, Evaluation};

const SCHEMA: &str = "
    CREATE TABLE form (
        id          TEXT PRIMARY KEY,
        ordinal     INTEGER NOT NULL,
        major       TEXT NOT NULL,
        minor       TEXT NOT NULL,
        conclusion  TEXT NOT NULL,
        figure      INTEGER NOT NULL,
        valid       INTEGER NOT NULL
    );
    CREATE TABLE fallacy (
        form_id     TEXT NOT NULL REFERENCES form(id),
        position    INTEGER NOT NULL,
        name        TEXT NOT NULL
    );
";

// left join so valid forms still come back, with a NULL fallacy
const SELECT_EVALUATIONS: &str = "
    SELECT form.id, fallacy.name
    FROM form LEFT JOIN fallacy ON fallacy.form_id = form.id
";

/// Narrows `Catalog::evaluations`. `None` means any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Filter {
    pub validity: Option<bool>,
    pub figure: Option<Figure>,
}

pub struct Catalog {
    conn: Connection,
}

impl Catalog {
    pub fn build() -> Result<Catalog> {
        let started = time::precise_time_ns();
        let mut conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;

        let tx = conn.transaction()?;
        for form in Form::all() {
            let e = evaluate_form(form)?;
            let id = form.to_string();
            tx.execute(
                "INSERT INTO form (id, ordinal, major, minor, conclusion, figure, valid)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    id,
                    form.ordinal() as i64,
                    form.major.to_string(),
                    form.minor.to_string(),
                    form.conclusion.to_string(),
                    form.figure.number(),
                    e.is_valid(),
                ],
            )?;
            for (position, fallacy) in e.fallacies.iter().enumerate() {
                tx.execute(
                    "INSERT INTO fallacy (form_id, position, name) VALUES (?1, ?2, ?3)",
                    params![id, position as i64, fallacy.name()],
                )?;
            }
        }
        tx.commit()?;

        let catalog = Catalog { conn };
        debug!(
            "catalog built in {}us",
            (time::precise_time_ns() - started) / 1_000
        );
        info!("catalog holds {} forms", catalog.len()?);
        Ok(catalog)
    }

    pub fn len(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM form", params![], |row| row.get(0))?;
        Ok(n as usize)
    }

    /// Evaluations matching `filter`, in enumeration order.
    pub fn evaluations(&self, filter: Filter) -> Result<Vec<Evaluation>> {
        let figure = filter.figure.map(|f| f.number());
        self.select(
            "WHERE (?1 IS NULL OR form.valid = ?1) AND (?2 IS NULL OR form.figure = ?2)",
            &[&filter.validity as &dyn ToSql, &figure],
        )
    }

    pub fn lookup(&self, form: Form) -> Result<Evaluation> {
        let found = self.select("WHERE form.id = ?1", &[&form.to_string() as &dyn ToSql])?;
        found
            .into_iter()
            .next()
            .ok_or_else(|| rusqlite::Error::QueryReturnedNoRows.into())
    }

    // every form that commits `fallacy`, in enumeration order
    pub fn committing(&self, fallacy: Fallacy) -> Result<Vec<Form>> {
        let mut stmt = self.conn.prepare(
            "SELECT form.id FROM fallacy JOIN form ON form.id = fallacy.form_id
             WHERE fallacy.name = ?1 ORDER BY form.ordinal",
        )?;
        let ids = stmt
            .query_map(params![fallacy.name()], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        ids.iter().map(|id| parse_form(id)).collect()
    }

    /// How many forms commit each fallacy, in check order.
    pub fn fallacy_counts(&self) -> Result<Vec<(Fallacy, usize)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, COUNT(*) FROM fallacy GROUP BY name")?;
        let counts = stmt
            .query_map(params![], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })?
            .collect::<rusqlite::Result<HashMap<String, i64>>>()?;
        Ok(Fallacy::ALL
            .iter()
            .map(|f| (*f, counts.get(f.name()).copied().unwrap_or(0) as usize))
            .collect())
    }

    fn select(&self, clause: &str, args: &[&dyn ToSql]) -> Result<Vec<Evaluation>> {
        let sql = format!(
            "{} {} ORDER BY form.ordinal, fallacy.position",
            SELECT_EVALUATIONS, clause
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(args, |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
            })?
            .collect::<rusqlite::Result<Vec<(String, Option<String>)>>>()?;

        let mut evaluations: Vec<Evaluation> = vec![];
        for (id, name) in rows {
            let form = parse_form(&id)?;
            if evaluations.last().map(|e| e.form) != Some(form) {
                evaluations.push(Evaluation {
                    form,
                    fallacies: vec![],
                });
            }
            if let (Some(name), Some(e)) = (name, evaluations.last_mut()) {
                e.fallacies.push(name.parse()?);
            }
        }
        Ok(evaluations)
    }
}

#[test]
fn holds_every_form() {
    let c = Catalog::build().unwrap();
    assert_eq!(256, c.len().unwrap());
    let all = c.evaluations(Filter::default()).unwrap();
    let forms: Vec<Form> = all.iter().map(|e| e.form).collect();
    assert_eq!(Form::all().collect::<Vec<_>>(), forms);
}

#[test]
fn valid_forms() {
    let c = Catalog::build().unwrap();
    let valid: Vec<String> = c
        .evaluations(Filter {
            validity: Some(true),
            figure: None,
        })
        .unwrap()
        .iter()
        .map(|e| e.form.to_string())
        .collect();
    assert_eq!(
        vec![
            "AAA-1", "AAI-1", "AAI-3", "AAI-4", "AEE-2", "AEE-4", "AEO-2", "AEO-4", "AII-1",
            "AII-3", "AOO-2", "EAE-1", "EAE-2", "EAO-1", "EAO-2", "EAO-3", "EAO-4", "EIO-1",
            "EIO-2", "EIO-3", "EIO-4", "IAI-3", "IAI-4", "OAO-3",
        ],
        valid
    );
}

#[test]
fn filter_by_figure() {
    let c = Catalog::build().unwrap();
    for figure in Figure::ALL.iter() {
        let valid = c
            .evaluations(Filter {
                validity: Some(true),
                figure: Some(*figure),
            })
            .unwrap();
        assert_eq!(6, valid.len());
        assert!(valid.iter().all(|e| e.form.figure == *figure));

        let invalid = c
            .evaluations(Filter {
                validity: Some(false),
                figure: Some(*figure),
            })
            .unwrap();
        assert_eq!(58, invalid.len());
        assert!(invalid.iter().all(|e| !e.is_valid()));
    }
}

#[test]
fn lookup_keeps_check_order() {
    use crate::ast::Mood;
    let c = Catalog::build().unwrap();
    let form = Form::new(Mood::I, Mood::I, Mood::E, Figure::new(2).unwrap());
    assert_eq!(evaluate_form(form).unwrap(), c.lookup(form).unwrap());
    assert_eq!(4, c.lookup(form).unwrap().fallacies.len());
}

#[test]
fn counts_per_fallacy() {
    let c = Catalog::build().unwrap();
    assert_eq!(
        vec![
            (Fallacy::UndistributedMiddle, 64),
            (Fallacy::IllicitMajor, 64),
            (Fallacy::IllicitMinor, 64),
            (Fallacy::TwoNegativePremises, 64),
            (Fallacy::NegativePremiseAffirmativeConclusion, 96),
            (Fallacy::TwoAffirmativePremisesNegativeConclusion, 32),
        ],
        c.fallacy_counts().unwrap()
    );
}

#[test]
fn forms_committing_a_fallacy() {
    let c = Catalog::build().unwrap();
    let forms = c
        .committing(Fallacy::TwoAffirmativePremisesNegativeConclusion)
        .unwrap();
    assert_eq!(32, forms.len());
    assert_eq!("AAE-1", forms[0].to_string());
    assert_eq!("IIO-4", forms[31].to_string());
}
