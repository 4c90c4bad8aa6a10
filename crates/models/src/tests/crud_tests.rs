use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, NotSet, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::setup_test_db;
use crate::{company, invoice};

fn unique_code(prefix: &str) -> String {
    format!("{}_{}", prefix, &Uuid::new_v4().simple().to_string()[..12])
}

async fn insert_company(db: &sea_orm::DatabaseConnection, prefix: &str) -> Result<company::Model> {
    let code = unique_code(prefix);
    let am = company::ActiveModel {
        code: Set(code.clone()),
        name: Set(format!("{} Inc", code)),
        description: Set("test company".into()),
    };
    Ok(am.insert(db).await?)
}

async fn insert_invoice(db: &sea_orm::DatabaseConnection, comp_code: &str, amt: f64) -> Result<invoice::Model> {
    let am = invoice::ActiveModel {
        id: NotSet,
        comp_code: Set(comp_code.to_string()),
        amt: Set(amt),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

#[tokio::test]
async fn test_company_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let created = insert_company(&db, "crud").await?;
    let found = company::Entity::find_by_id(created.code.clone()).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    let mut am: company::ActiveModel = created.clone().into();
    am.description = Set("changed".into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.code, created.code);
    assert_eq!(updated.description, "changed");

    let res = company::Entity::delete_by_id(created.code.clone()).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    let res = company::Entity::delete_by_id(created.code).exec(&db).await?;
    assert_eq!(res.rows_affected, 0);
    Ok(())
}

#[tokio::test]
async fn test_invoice_defaults_applied_on_insert() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let c = insert_company(&db, "defaults").await?;
    let inv = insert_invoice(&db, &c.code, 100.0).await?;
    assert!(inv.id > 0);
    assert_eq!(inv.comp_code, c.code);
    assert!(!inv.paid);
    assert!(inv.paid_date.is_none());
    let today = chrono::Utc::now().date_naive();
    assert!((inv.add_date - today).num_days().abs() <= 1, "add_date defaults to the current date");

    let json = serde_json::to_value(&inv)?;
    assert!(json["paid_date"].is_null());
    assert_eq!(json["paid"], false);

    company::Entity::delete_by_id(c.code).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_invoice_requires_existing_company() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let err = insert_invoice(&db, &unique_code("missing"), 10.0).await;
    assert!(err.is_err(), "foreign key must reject unknown comp_code");
    Ok(())
}

#[tokio::test]
async fn test_invoice_amount_must_be_positive() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let c = insert_company(&db, "amt").await?;
    assert!(insert_invoice(&db, &c.code, 0.0).await.is_err());
    assert!(insert_invoice(&db, &c.code, -5.0).await.is_err());
    company::Entity::delete_by_id(c.code).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_company_invoice_relation_and_cascade() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let c = insert_company(&db, "rel").await?;
    let a = insert_invoice(&db, &c.code, 10.0).await?;
    let b = insert_invoice(&db, &c.code, 20.0).await?;

    let related = c
        .find_related(invoice::Entity)
        .order_by_asc(invoice::Column::Id)
        .all(&db)
        .await?;
    assert_eq!(related.iter().map(|i| i.id).collect::<Vec<_>>(), vec![a.id, b.id]);

    let (inv, owner) = invoice::Entity::find_by_id(a.id)
        .find_also_related(company::Entity)
        .one(&db)
        .await?
        .expect("invoice present");
    assert_eq!(inv.id, a.id);
    assert_eq!(owner, Some(c.clone()));

    company::Entity::delete_by_id(c.code.clone()).exec(&db).await?;
    let left = invoice::Entity::find()
        .filter(invoice::Column::CompCode.eq(c.code))
        .all(&db)
        .await?;
    assert!(left.is_empty(), "invoices removed with their company");
    Ok(())
}
