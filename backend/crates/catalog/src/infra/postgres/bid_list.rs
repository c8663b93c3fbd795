use chrono::NaiveDateTime;

use super::PgCatalogRepository;
use crate::domain::entity::BidList;
use crate::domain::repository::Repository;
use crate::error::CatalogResult;

const SELECT_BID_LIST: &str = r#"
    SELECT
        id, account, type AS bid_type, bid_quantity, ask_quantity, bid, ask,
        benchmark, bid_list_date, commentary, security, status, trader, book,
        creation_name, creation_date, revision_name, revision_date,
        deal_name, deal_type, source_list_id, side
    FROM bid_list
"#;

const INSERT_BID_LIST: &str = r#"
    INSERT INTO bid_list (
        account, type, bid_quantity, ask_quantity, bid, ask,
        benchmark, bid_list_date, commentary, security, status, trader, book,
        creation_name, creation_date, revision_name, revision_date,
        deal_name, deal_type, source_list_id, side
    ) VALUES (
        $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
        $14, $15, $16, $17, $18, $19, $20, $21
    )
    RETURNING id
"#;

/// Same parameter order as the insert, id last.
const UPDATE_BID_LIST: &str = r#"
    UPDATE bid_list SET
        account = $1, type = $2, bid_quantity = $3, ask_quantity = $4,
        bid = $5, ask = $6, benchmark = $7, bid_list_date = $8,
        commentary = $9, security = $10, status = $11, trader = $12, book = $13,
        creation_name = $14, creation_date = $15,
        revision_name = $16, revision_date = $17,
        deal_name = $18, deal_type = $19, source_list_id = $20, side = $21
    WHERE id = $22
    RETURNING id
"#;

impl Repository<BidList> for PgCatalogRepository {
    async fn find_all(&self) -> CatalogResult<Vec<BidList>> {
        let rows = sqlx::query_as::<_, BidListRow>(&format!("{SELECT_BID_LIST} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(BidListRow::into_bid_list).collect())
    }

    async fn find_by_id(&self, id: i32) -> CatalogResult<Option<BidList>> {
        let row = sqlx::query_as::<_, BidListRow>(&format!("{SELECT_BID_LIST} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(BidListRow::into_bid_list))
    }

    async fn save(&self, mut record: BidList) -> CatalogResult<BidList> {
        let sql = match record.id {
            None => INSERT_BID_LIST,
            Some(_) => UPDATE_BID_LIST,
        };

        let mut query = sqlx::query_scalar::<_, i32>(sql)
            .bind(&record.account)
            .bind(&record.bid_type)
            .bind(record.bid_quantity)
            .bind(record.ask_quantity)
            .bind(record.bid)
            .bind(record.ask)
            .bind(&record.benchmark)
            .bind(record.bid_list_date)
            .bind(&record.commentary)
            .bind(&record.security)
            .bind(&record.status)
            .bind(&record.trader)
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
        sqlx::query("DELETE FROM bid_list WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> CatalogResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM bid_list WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

#[derive(sqlx::FromRow)]
struct BidListRow {
    id: i32,
    account: String,
    bid_type: String,
    bid_quantity: Option<f64>,
    ask_quantity: Option<f64>,
    bid: Option<f64>,
    ask: Option<f64>,
    benchmark: Option<String>,
    bid_list_date: Option<NaiveDateTime>,
    commentary: Option<String>,
    security: Option<String>,
    status: Option<String>,
    trader: Option<String>,
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

impl BidListRow {
    fn into_bid_list(self) -> BidList {
        BidList {
            id: Some(self.id),
            account: self.account,
            bid_type: self.bid_type,
            bid_quantity: self.bid_quantity,
            ask_quantity: self.ask_quantity,
            bid: self.bid,
            ask: self.ask,
            benchmark: self.benchmark,
            bid_list_date: self.bid_list_date,
            commentary: self.commentary,
            security: self.security,
            status: self.status,
            trader: self.trader,
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
