use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use sea_orm::sea_query::{Expr, JoinType};
use models::{company, invoice};
use crate::company::domain::{CompanyChanges, NewCompany};
use crate::errors::ServiceError;
use super::set_or_omit;

/// List all companies ordered by name.
pub async fn list_companies(db: &DatabaseConnection) -> Result<Vec<company::Model>, ServiceError> {
    company::Entity::find()
        .order_by_asc(company::Column::Name)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get a company by code.
pub async fn get_company(db: &DatabaseConnection, code: &str) -> Result<Option<company::Model>, ServiceError> {
    company::Entity::find_by_id(code.to_string())
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Ids of the invoices owned by `code`, ascending. Empty when it has none.
pub async fn list_invoice_ids(db: &DatabaseConnection, code: &str) -> Result<Vec<i32>, ServiceError> {
    invoice::Entity::find()
        .select_only()
        .column(invoice::Column::Id)
        .join(JoinType::InnerJoin, invoice::Relation::Company.def())
        .filter(invoice::Column::CompCode.eq(code))
        .order_by_asc(invoice::Column::Id)
        .into_tuple::<i32>()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Insert a company. A duplicate code or name, or a missing field, is a
/// storage error: unset columns have no default and hit NOT NULL.
pub async fn create_company(db: &DatabaseConnection, input: NewCompany) -> Result<company::Model, ServiceError> {
    let am = company::ActiveModel {
        code: set_or_omit(input.code),
        name: set_or_omit(input.name),
        description: set_or_omit(input.description),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Single `UPDATE ... WHERE code = $1 RETURNING`; `None` when no row matched.
/// Missing fields are written as NULL.
pub async fn update_company(
    db: &DatabaseConnection,
    code: &str,
    changes: CompanyChanges,
) -> Result<Option<company::Model>, ServiceError> {
    let updated = company::Entity::update_many()
        .col_expr(company::Column::Name, Expr::value(changes.name))
        .col_expr(company::Column::Description, Expr::value(changes.description))
        .filter(company::Column::Code.eq(code))
        .exec_with_returning(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated.into_iter().next())
}

/// Delete a company (and, via the foreign key, its invoices); returns true if deleted.
pub async fn delete_company(db: &DatabaseConnection, code: &str) -> Result<bool, ServiceError> {
    let res = company::Entity::delete_by_id(code.to_string())
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::invoice_store::create_invoice;
    use crate::invoice::domain::NewInvoice;
    use crate::test_support::{get_db, unique_code};

    fn new_company(code: &str) -> NewCompany {
        NewCompany::new(code.to_string(), format!("{} Corp", code), "svc test")
    }

    #[tokio::test]
    async fn company_crud_store() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let code = unique_code("svc_co");

        let created = create_company(&db, new_company(&code)).await?;
        assert_eq!(created.code, code);

        let found = get_company(&db, &code).await?.unwrap();
        assert_eq!(found, created);
        assert!(list_companies(&db).await?.iter().any(|c| c.code == code));
        assert!(list_invoice_ids(&db, &code).await?.is_empty());

        let updated = update_company(&db, &code, CompanyChanges::new(format!("{} Renamed", code), "new"))
            .await?
            .unwrap();
        assert_eq!(updated.code, code);
        assert_eq!(updated.description, "new");

        assert!(delete_company(&db, &code).await?);
        assert!(!delete_company(&db, &code).await?);
        assert!(get_company(&db, &code).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_company_returns_none() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let res = update_company(&db, &unique_code("ghost"), CompanyChanges::new("n", "d")).await?;
        assert!(res.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_code_is_db_error() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let code = unique_code("dup");
        create_company(&db, new_company(&code)).await?;
        let err = create_company(&db, new_company(&code)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        delete_company(&db, &code).await?;
        Ok(())
    }

    #[tokio::test]
    async fn missing_fields_violate_not_null() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let code = unique_code("nulls");
        let partial = NewCompany { code: Some(code.clone()), ..Default::default() };
        assert!(matches!(create_company(&db, partial).await, Err(ServiceError::Db(_))));
        assert!(get_company(&db, &code).await?.is_none());

        create_company(&db, new_company(&code)).await?;
        let err = update_company(&db, &code, CompanyChanges::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        // a missing row is still reported as no match
        assert!(update_company(&db, &unique_code("ghost"), CompanyChanges::default()).await?.is_none());
        delete_company(&db, &code).await?;
        Ok(())
    }

    #[tokio::test]
    async fn invoice_ids_follow_comp_code() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let code = unique_code("ids");
        create_company(&db, new_company(&code)).await?;
        let a = create_invoice(&db, NewInvoice::new(code.clone(), 10.0)).await?;
        let b = create_invoice(&db, NewInvoice::new(code.clone(), 20.0)).await?;

        assert_eq!(list_invoice_ids(&db, &code).await?, vec![a.id, b.id]);

        delete_company(&db, &code).await?;
        Ok(())
    }
}
