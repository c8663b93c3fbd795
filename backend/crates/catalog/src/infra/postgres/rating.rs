use super::PgCatalogRepository;
use crate::domain::entity::Rating;
use crate::domain::repository::Repository;
use crate::error::CatalogResult;

const SELECT_RATING: &str =
    "SELECT id, moodys_rating, sand_p_rating, fitch_rating, order_number FROM rating";

impl Repository<Rating> for PgCatalogRepository {
    async fn find_all(&self) -> CatalogResult<Vec<Rating>> {
        let rows = sqlx::query_as::<_, RatingRow>(&format!("{SELECT_RATING} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(RatingRow::into_rating).collect())
    }

    async fn find_by_id(&self, id: i32) -> CatalogResult<Option<Rating>> {
        let row = sqlx::query_as::<_, RatingRow>(&format!("{SELECT_RATING} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(RatingRow::into_rating))
    }

    async fn save(&self, mut record: Rating) -> CatalogResult<Rating> {
        let id = match record.id {
            None => {
                sqlx::query_scalar::<_, i32>(
                    r#"
                    INSERT INTO rating (moodys_rating, sand_p_rating, fitch_rating, order_number)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(&record.moodys_rating)
                .bind(&record.sand_p_rating)
                .bind(&record.fitch_rating)
                .bind(record.order_number)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_scalar::<_, i32>(
                    r#"
                    UPDATE rating
                    SET moodys_rating = $2, sand_p_rating = $3, fitch_rating = $4,
                        order_number = $5
                    WHERE id = $1
                    RETURNING id
                    "#,
                )
                .bind(id)
                .bind(&record.moodys_rating)
                .bind(&record.sand_p_rating)
                .bind(&record.fitch_rating)
                .bind(record.order_number)
                .fetch_one(&self.pool)
                .await?
            }
        };

        record.id = Some(id);
        Ok(record)
    }

    async fn delete_by_id(&self, id: i32) -> CatalogResult<()> {
        sqlx::query("DELETE FROM rating WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> CatalogResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM rating WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

#[derive(sqlx::FromRow)]
struct RatingRow {
    id: i32,
    moodys_rating: String,
    sand_p_rating: String,
    fitch_rating: String,
    order_number: Option<i32>,
}

impl RatingRow {
    fn into_rating(self) -> Rating {
        Rating {
            id: Some(self.id),
            moodys_rating: self.moodys_rating,
            sand_p_rating: self.sand_p_rating,
            fitch_rating: self.fitch_rating,
            order_number: self.order_number,
        }
    }
}
