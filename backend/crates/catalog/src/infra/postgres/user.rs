use auth::Role;
use platform::password::HashedPassword;

use super::PgCatalogRepository;
use crate::domain::entity::User;
use crate::domain::repository::Repository;
use crate::error::CatalogResult;

impl Repository<User> for PgCatalogRepository {
    async fn find_all(&self) -> CatalogResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password, fullname, role FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    async fn find_by_id(&self, id: i32) -> CatalogResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password, fullname, role FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn save(&self, mut record: User) -> CatalogResult<User> {
        let id = match record.id {
            None => {
                sqlx::query_scalar::<_, i32>(
                    r#"
                    INSERT INTO users (username, password, fullname, role)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(&record.username)
                .bind(record.password_hash.as_phc_string())
                .bind(&record.fullname)
                .bind(record.role.as_str())
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_scalar::<_, i32>(
                    r#"
                    UPDATE users
                    SET username = $2, password = $3, fullname = $4, role = $5
                    WHERE id = $1
                    RETURNING id
                    "#,
                )
                .bind(id)
                .bind(&record.username)
                .bind(record.password_hash.as_phc_string())
                .bind(&record.fullname)
                .bind(record.role.as_str())
                .fetch_one(&self.pool)
                .await?
            }
        };

        record.id = Some(id);
        Ok(record)
    }

    async fn delete_by_id(&self, id: i32) -> CatalogResult<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> CatalogResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Exact, case-sensitive username match
    async fn find_by_natural_key(&self, username: &str) -> CatalogResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password, fullname, role FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    username: String,
    password: String,
    fullname: String,
    role: String,
}

impl UserRow {
    fn into_user(self) -> CatalogResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password)?;

        Ok(User {
            id: Some(self.id),
            username: self.username,
            password_hash,
            fullname: self.fullname,
            role: Role::new(self.role),
        })
    }
}
