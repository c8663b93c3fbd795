use super::PgCatalogRepository;
use crate::domain::entity::RuleName;
use crate::domain::repository::Repository;
use crate::error::CatalogResult;

const SELECT_RULE_NAME: &str =
    "SELECT id, name, description, json, template, sql_str, sql_part FROM rule_name";

impl Repository<RuleName> for PgCatalogRepository {
    async fn find_all(&self) -> CatalogResult<Vec<RuleName>> {
        let rows = sqlx::query_as::<_, RuleNameRow>(&format!("{SELECT_RULE_NAME} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(RuleNameRow::into_rule_name).collect())
    }

    async fn find_by_id(&self, id: i32) -> CatalogResult<Option<RuleName>> {
        let row = sqlx::query_as::<_, RuleNameRow>(&format!("{SELECT_RULE_NAME} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(RuleNameRow::into_rule_name))
    }

    async fn save(&self, mut record: RuleName) -> CatalogResult<RuleName> {
        let id = match record.id {
            None => {
                sqlx::query_scalar::<_, i32>(
                    r#"
                    INSERT INTO rule_name (name, description, json, template, sql_str, sql_part)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING id
                    "#,
                )
                .bind(&record.name)
                .bind(&record.description)
                .bind(&record.json)
                .bind(&record.template)
                .bind(&record.sql_str)
                .bind(&record.sql_part)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_scalar::<_, i32>(
                    r#"
                    UPDATE rule_name
                    SET name = $2, description = $3, json = $4, template = $5,
                        sql_str = $6, sql_part = $7
                    WHERE id = $1
                    RETURNING id
                    "#,
                )
                .bind(id)
                .bind(&record.name)
                .bind(&record.description)
                .bind(&record.json)
                .bind(&record.template)
                .bind(&record.sql_str)
                .bind(&record.sql_part)
                .fetch_one(&self.pool)
                .await?
            }
        };

        record.id = Some(id);
        Ok(record)
    }

    async fn delete_by_id(&self, id: i32) -> CatalogResult<()> {
        sqlx::query("DELETE FROM rule_name WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> CatalogResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM rule_name WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

#[derive(sqlx::FromRow)]
struct RuleNameRow {
    id: i32,
    name: String,
    description: Option<String>,
    json: Option<String>,
    template: Option<String>,
    sql_str: Option<String>,
    sql_part: Option<String>,
}

impl RuleNameRow {
    fn into_rule_name(self) -> RuleName {
        RuleName {
            id: Some(self.id),
            name: self.name,
            description: self.description,
            json: self.json,
            template: self.template,
            sql_str: self.sql_str,
            sql_part: self.sql_part,
        }
    }
}
