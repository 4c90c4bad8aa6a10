use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct StatusResponse {
    #[schema(example = "Deleted!")]
    pub status: String,
}

#[derive(ToSchema)]
pub struct ErrorBody { pub message: String, pub status: u16 }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: ErrorBody }

#[derive(ToSchema)]
pub struct CompanyDoc {
    #[schema(example = "twitter")]
    pub code: String,
    #[schema(example = "Twitter")]
    pub name: String,
    pub description: String,
}

#[derive(ToSchema)]
pub struct CompanyDetailDoc {
    pub code: String,
    pub name: String,
    pub description: String,
    pub invoices: Vec<i32>,
}

#[derive(ToSchema)]
pub struct NewCompanyDoc { pub code: String, pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct CompanyChangesDoc { pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct CompanyListResponse { pub companies: Vec<CompanyDoc> }

#[derive(ToSchema)]
pub struct CompanyResponse { pub company: CompanyDoc }

#[derive(ToSchema)]
pub struct CompanyDetailResponse { pub company: CompanyDetailDoc }

#[derive(ToSchema)]
pub struct InvoiceSummaryDoc { pub id: i32, pub comp_code: String, pub amt: f64 }

/// Full invoice row as returned by create and update.
#[derive(ToSchema)]
pub struct InvoiceDoc {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    #[schema(example = "2024-01-31")]
    pub add_date: String,
    pub paid_date: Option<String>,
}

/// Invoice half of a single-invoice read; no `comp_code`.
#[derive(ToSchema)]
pub struct InvoiceDetailDoc {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: String,
    pub paid_date: Option<String>,
}

#[derive(ToSchema)]
pub struct NewInvoiceDoc {
    #[schema(example = "twitter")]
    pub comp_code: String,
    pub amt: f64,
}

#[derive(ToSchema)]
pub struct InvoiceChangesDoc { pub amt: f64 }

#[derive(ToSchema)]
pub struct InvoiceListResponse { pub invoices: Vec<InvoiceSummaryDoc> }

#[derive(ToSchema)]
pub struct InvoiceResponse { pub invoice: InvoiceDoc }

#[derive(ToSchema)]
pub struct InvoiceDetailResponse { pub invoice: InvoiceDetailDoc, pub company: CompanyDoc }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::get,
        crate::routes::companies::create,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::invoices::list,
        crate::routes::invoices::get,
        crate::routes::invoices::create,
        crate::routes::invoices::update,
        crate::routes::invoices::delete,
    ),
    components(
        schemas(
            HealthResponse,
            StatusResponse,
            ErrorBody,
            ErrorResponse,
            CompanyDoc,
            CompanyDetailDoc,
            NewCompanyDoc,
            CompanyChangesDoc,
            CompanyListResponse,
            CompanyResponse,
            CompanyDetailResponse,
            InvoiceSummaryDoc,
            InvoiceDoc,
            InvoiceDetailDoc,
            NewInvoiceDoc,
            InvoiceChangesDoc,
            InvoiceListResponse,
            InvoiceResponse,
            InvoiceDetailResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "invoices")
    )
)]
pub struct ApiDoc;
