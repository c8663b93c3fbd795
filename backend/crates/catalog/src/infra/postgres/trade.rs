use chrono::NaiveDateTime;

use super::PgCatalogRepository;
use crate::domain::entity::Trade;
use crate::domain::repository::Repository;
use crate::error::CatalogResult;

const SELECT_TRADE: &str = r#"
    SELECT
        id, account, type AS trade_type, buy_quantity, sell_quantity,
        buy_price, sell_price, trade_date, security, status, trader,
        benchmark, book, creation_name, creation_date, revision_name,
        revision_date, deal_name, deal_type, source_list_id, side
    FROM trade
"#;

const INSERT_TRADE: &str = r#"
    INSERT INTO trade (
        account, type, buy_quantity, sell_quantity, buy_price, sell_price,
        trade_date, security, status, trader, benchmark, book,
        creation_name, creation_date, revision_name, revision_date,
        deal_name, deal_type, source_list_id, side
    ) VALUES (
        $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
        $13, $14, $15, $16, $17, $18, $19, $20
    )
    RETURNING id
"#;

/// Same parameter order as the insert, id last.
const UPDATE_TRADE: &str = r#"
    UPDATE trade SET
        account = $1, type = $2, buy_quantity = $3, sell_quantity = $4,
        buy_price = $5, sell_price = $6, trade_date = $7, security = $8,
        status = $9, trader = $10, benchmark = $11, book = $12,
        creation_name = $13, creation_date = $14,
        revision_name = $15, revision_date = $16,
        deal_name = $17, deal_type = $18, source_list_id = $19, side = $20
    WHERE id = $21
    RETURNING id
"#;

impl Repository<Trade> for PgCatalogRepository {
    async fn find_all(&self) -> CatalogResult<Vec<Trade>> {
        let rows = sqlx::query_as::<_, TradeRow>(&format!("{SELECT_TRADE} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(TradeRow::into_trade).collect())
    }

    async fn find_by_id(&self, id: i32) -> CatalogResult<Option<Trade>> {
        let row = sqlx::query_as::<_, TradeRow>(&format!("{SELECT_TRADE} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(TradeRow::into_trade))
    }

    async fn save(&self, mut record: Trade) -> CatalogResult<Trade> {
        let sql = match record.id {
            None => INSERT_TRADE,
            Some(_) => UPDATE_TRADE,
        };

        let mut query = sqlx::query_scalar::<_, i32>(sql)
            .bind(&record.account)
            .bind(&record.trade_type)
            .bind(record.buy_quantity)
            .bind(record.sell_quantity)
            .bind(record.buy_price)
            .bind(record.sell_price)
            .bind(record.trade_date)
            .bind(&record.security)
            .bind(&record.status)
            .bind(&record.trader)
            .bind(&record.benchmark)
            .bind(&record.book)
            .bind(&record.creation_name)
            .bind(record.creation_date)
            .bind(&record.revision_name)
            .bind(record.revision_date)
            .bind(&record.deal_name)
            .bind(&record.deal_type)
            .bind(&record.source_list_id)
            .bind(&record.side);
        if let Some(id) = record.id {
            query = query.bind(id);
        }

        let id = query.fetch_one(&self.pool).await?;
        record.id = Some(id);
        Ok(record)
    }

    async fn delete_by_id(&self, id: i32) -> CatalogResult<()> {
        sqlx::query("DELETE FROM trade WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> CatalogResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM trade WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

#[derive(sqlx::FromRow)]
struct TradeRow {
    id: i32,
    account: String,
    trade_type: String,
    buy_quantity: Option<f64>,
    sell_quantity: Option<f64>,
    buy_price: Option<f64>,
    sell_price: Option<f64>,
    trade_date: Option<NaiveDateTime>,
    security: Option<String>,
    status: Option<String>,
    trader: Option<String>,
    benchmark: Option<String>,
    book: Option<String>,
    creation_name: Option<String>,
    creation_date: Option<NaiveDateTime>,
    revision_name: Option<String>,
    revision_date: Option<NaiveDateTime>,
    deal_name: Option<String>,
    deal_type: Option<String>,
    source_list_id: Option<String>,
    side: Option<String>,
}

impl TradeRow {
    fn into_trade(self) -> Trade {
        Trade {
            id: Some(self.id),
            account: self.account,
            trade_type: self.trade_type,
            buy_quantity: self.buy_quantity,
            sell_quantity: self.sell_quantity,
            buy_price: self.buy_price,
            sell_price: self.sell_price,
            trade_date: self.trade_date,
            security: self.security,
            status: self.status,
            trader: self.trader,
            benchmark: self.benchmark,
            book: self.book,
            creation_name: self.creation_name,
            creation_date: self.creation_date,
            revision_name: self.revision_name,
            revision_date: self.revision_date,
            deal_name: self.deal_name,
            deal_type: self.deal_type,
            source_list_id: self.source_list_id,
            side: self.side,
        }
    }
}
