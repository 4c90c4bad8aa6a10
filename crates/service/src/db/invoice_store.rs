use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use sea_orm::sea_query::{Expr, JoinType};
use models::{company, invoice};
use crate::errors::ServiceError;
use super::set_or_omit;
use crate::invoice::domain::{InvoiceChanges, InvoiceDetail, InvoiceSummary, NewInvoice};

/// List all invoices by ascending id with the slim `{id, comp_code, amt}` shape.
pub async fn list_invoices(db: &DatabaseConnection) -> Result<Vec<InvoiceSummary>, ServiceError> {
    invoice::Entity::find()
        .select_only()
        .columns([invoice::Column::Id, invoice::Column::CompCode, invoice::Column::Amt])
        .order_by_asc(invoice::Column::Id)
        .into_model::<InvoiceSummary>()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Invoice fields of a single read. The company join only guards the owner's existence.
pub async fn get_invoice(db: &DatabaseConnection, id: i32) -> Result<Option<InvoiceDetail>, ServiceError> {
    invoice::Entity::find_by_id(id)
        .select_only()
        .columns([
            invoice::Column::Id,
            invoice::Column::Amt,
            invoice::Column::Paid,
            invoice::Column::AddDate,
            invoice::Column::PaidDate,
        ])
        .join(JoinType::InnerJoin, invoice::Relation::Company.def())
        .into_model::<InvoiceDetail>()
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// The company owning invoice `id`, through the same join.
pub async fn get_invoice_company(db: &DatabaseConnection, id: i32) -> Result<Option<company::Model>, ServiceError> {
    company::Entity::find()
        .join(JoinType::InnerJoin, company::Relation::Invoices.def())
        .filter(invoice::Column::Id.eq(id))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Insert an invoice; `paid`, `add_date` and `paid_date` come from column defaults.
/// No pre-check on `comp_code`: an unknown or missing one fails the foreign key
/// or NOT NULL constraint.
pub async fn create_invoice(db: &DatabaseConnection, input: NewInvoice) -> Result<invoice::Model, ServiceError> {
    let am = invoice::ActiveModel {
        id: NotSet,
        comp_code: set_or_omit(input.comp_code),
        amt: set_or_omit(input.amt),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Single `UPDATE invoices SET amt = $1 WHERE id = $2 RETURNING *`; `None` when no row matched.
pub async fn update_invoice(
    db: &DatabaseConnection,
    id: i32,
    changes: InvoiceChanges,
) -> Result<Option<invoice::Model>, ServiceError> {
    let updated = invoice::Entity::update_many()
        .col_expr(invoice::Column::Amt, Expr::value(changes.amt))
        .filter(invoice::Column::Id.eq(id))
        .exec_with_returning(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated.into_iter().next())
}

/// Delete an invoice; returns true if deleted.
pub async fn delete_invoice(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = invoice::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::domain::NewCompany;
    use crate::db::company_store::{create_company, delete_company};
    use crate::test_support::{get_db, unique_code};

    async fn seed_company(db: &DatabaseConnection) -> Result<company::Model, ServiceError> {
        let code = unique_code("svc_inv");
        create_company(db, NewCompany::new(code.clone(), format!("{} Ltd", code), "invoice tests")).await
    }

    #[tokio::test]
    async fn invoice_crud_store() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let c = seed_company(&db).await?;

        let created = create_invoice(&db, NewInvoice::new(c.code.clone(), 100.0)).await?;
        assert!(!created.paid);
        assert!(created.paid_date.is_none());

        let detail = get_invoice(&db, created.id).await?.unwrap();
        assert_eq!(detail, InvoiceDetail::from(&created));
        let owner = get_invoice_company(&db, created.id).await?.unwrap();
        assert_eq!(owner, c);

        let listed = list_invoices(&db).await?;
        assert!(listed.contains(&InvoiceSummary::from(&created)));
        assert!(listed.windows(2).all(|w| w[0].id < w[1].id));

        let updated = update_invoice(&db, created.id, InvoiceChanges::amount(42.5)).await?.unwrap();
        assert_eq!(updated.amt, 42.5);
        assert_eq!(updated.add_date, created.add_date);

        assert!(delete_invoice(&db, created.id).await?);
        assert!(!delete_invoice(&db, created.id).await?);
        assert!(get_invoice(&db, created.id).await?.is_none());
        assert!(get_invoice_company(&db, created.id).await?.is_none());

        delete_company(&db, &c.code).await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_invoice_returns_none() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        assert!(update_invoice(&db, i32::MAX, InvoiceChanges::amount(1.0)).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn missing_fields_reach_storage_as_null() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let err = create_invoice(&db, NewInvoice { comp_code: None, amt: Some(10.0) }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));

        let c = seed_company(&db).await?;
        let inv = create_invoice(&db, NewInvoice::new(c.code.clone(), 10.0)).await?;
        let err = update_invoice(&db, inv.id, InvoiceChanges::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        assert!(update_invoice(&db, i32::MAX, InvoiceChanges::default()).await?.is_none());
        delete_company(&db, &c.code).await?;
        Ok(())
    }

    #[tokio::test]
    async fn unknown_company_violates_foreign_key() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let err = create_invoice(&db, NewInvoice::new(unique_code("nobody"), 5.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        Ok(())
    }
}
