use chrono::NaiveDateTime;

use super::PgCatalogRepository;
use crate::domain::entity::CurvePoint;
use crate::domain::repository::Repository;
use crate::error::CatalogResult;

const SELECT_CURVE_POINT: &str =
    "SELECT id, curve_id, as_of_date, term, value, creation_date FROM curve_point";

impl Repository<CurvePoint> for PgCatalogRepository {
    async fn find_all(&self) -> CatalogResult<Vec<CurvePoint>> {
        let rows =
            sqlx::query_as::<_, CurvePointRow>(&format!("{SELECT_CURVE_POINT} ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(CurvePointRow::into_curve_point).collect())
    }

    async fn find_by_id(&self, id: i32) -> CatalogResult<Option<CurvePoint>> {
        let row =
            sqlx::query_as::<_, CurvePointRow>(&format!("{SELECT_CURVE_POINT} WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(CurvePointRow::into_curve_point))
    }

    async fn save(&self, mut record: CurvePoint) -> CatalogResult<CurvePoint> {
        let id = match record.id {
            None => {
                sqlx::query_scalar::<_, i32>(
                    r#"
                    INSERT INTO curve_point (curve_id, as_of_date, term, value, creation_date)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id
                    "#,
                )
                .bind(record.curve_id)
                .bind(record.as_of_date)
                .bind(record.term)
                .bind(record.value)
                .bind(record.creation_date)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_scalar::<_, i32>(
                    r#"
                    UPDATE curve_point
                    SET curve_id = $2, as_of_date = $3, term = $4, value = $5,
                        creation_date = $6
                    WHERE id = $1
                    RETURNING id
                    "#,
                )
                .bind(id)
                .bind(record.curve_id)
                .bind(record.as_of_date)
                .bind(record.term)
                .bind(record.value)
                .bind(record.creation_date)
                .fetch_one(&self.pool)
                .await?
            }
        };

        record.id = Some(id);
        Ok(record)
    }

    async fn delete_by_id(&self, id: i32) -> CatalogResult<()> {
        sqlx::query("DELETE FROM curve_point WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> CatalogResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM curve_point WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

#[derive(sqlx::FromRow)]
struct CurvePointRow {
    id: i32,
    curve_id: Option<i32>,
    as_of_date: Option<NaiveDateTime>,
    term: Option<f64>,
    value: Option<f64>,
    creation_date: Option<NaiveDateTime>,
}

impl CurvePointRow {
    fn into_curve_point(self) -> CurvePoint {
        CurvePoint {
            id: Some(self.id),
            curve_id: self.curve_id,
            as_of_date: self.as_of_date,
            term: self.term,
            value: self.value,
            creation_date: self.creation_date,
        }
    }
}
