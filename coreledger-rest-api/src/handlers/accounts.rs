//! Account management endpoints

use axum::{extract::State, http::StatusCode, Json};
use coreledger_api_types::{AccountDto, AccountsByTypeReportDto, CreateAccountRequest, Page, UpdateAccountRequest};
use coreledger_core::{Account, AccountStatus, AccountType, ClassifiedFault, FaultResult, NormalBalance};
use coreledger_web::{ApiResult, IdPath, ListQuery, ValidatedJson};
use tracing::{debug, info};

use crate::context::AccountsContext;

const DUPLICATE_CODE: &str = "Account with this code already exists";

/// List accounts with paging, sorting and an optional filter
pub async fn list_accounts(
    State(ctx): State<AccountsContext>,
    ListQuery(spec): ListQuery,
) -> ApiResult<Json<Page<AccountDto>>> {
    debug!("Listing accounts with query: {:?}", spec);

    let page = ctx.repositories.account_repository().find_page(&spec).await?;
    Ok(Json(page.map(AccountDto::from)))
}

/// Get a specific account by ID
pub async fn get_account(State(ctx): State<AccountsContext>, IdPath(id): IdPath) -> ApiResult<Json<AccountDto>> {
    let account = ctx
        .repositories
        .account_repository()
        .find_by_id(id)
        .await?
        .ok_or_else(|| ClassifiedFault::not_found("Account", id))?;

    Ok(Json(AccountDto::from(account)))
}

/// Active account count for every account type
pub async fn accounts_by_type_report(
    State(ctx): State<AccountsContext>,
) -> ApiResult<Json<Vec<AccountsByTypeReportDto>>> {
    let report = ctx.repositories.account_repository().active_counts_by_type().await?;
    Ok(Json(report))
}

/// Create a new account
pub async fn create_account(
    State(ctx): State<AccountsContext>,
    ValidatedJson(request): ValidatedJson<CreateAccountRequest>,
) -> ApiResult<(StatusCode, Json<AccountDto>)> {
    info!("Creating account with code: {}", request.code);
    let repo = ctx.repositories.account_repository();

    let account_type = require_account_type(&ctx, request.type_id).await?;
    if repo.find_by_code(request.code).await?.is_some() {
        return Err(ClassifiedFault::validation(DUPLICATE_CODE).into());
    }

    let (status, normal_balance) = typed_enums(&request)?;
    let mut account = Account::create(request.code, &request.name, request.type_id, status, normal_balance)?;
    account.type_description = Some(account_type.description);

    let created = repo.create(account).await?;
    info!(account_id = created.id, "Created account");

    Ok((StatusCode::CREATED, Json(AccountDto::from(created))))
}

/// Update an existing account
pub async fn update_account(
    State(ctx): State<AccountsContext>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateAccountRequest>,
) -> ApiResult<StatusCode> {
    info!("Updating account with ID: {}", id);
    let repo = ctx.repositories.account_repository();

    let mut account = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ClassifiedFault::not_found("Account", id))?;

    require_account_type(&ctx, request.type_id).await?;
    if let Some(existing) = repo.find_by_code(request.code).await? {
        if existing.id != id {
            return Err(ClassifiedFault::validation(DUPLICATE_CODE).into());
        }
    }

    let (status, normal_balance) = typed_enums(&request)?;
    account.update(request.code, &request.name, request.type_id, status, normal_balance)?;
    repo.update(account).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_account(State(ctx): State<AccountsContext>, IdPath(id): IdPath) -> ApiResult<StatusCode> {
    info!("Deleting account with ID: {}", id);

    if !ctx.repositories.account_repository().delete(id).await? {
        return Err(ClassifiedFault::not_found("Account", id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Deactivate an account; fails if it is already inactive
pub async fn deactivate_account(State(ctx): State<AccountsContext>, IdPath(id): IdPath) -> ApiResult<StatusCode> {
    info!("Deactivating account with ID: {}", id);
    let repo = ctx.repositories.account_repository();

    let mut account = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ClassifiedFault::not_found("Account", id))?;

    account.deactivate()?;
    repo.update(account).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reactivate an inactive account
pub async fn activate_account(State(ctx): State<AccountsContext>, IdPath(id): IdPath) -> ApiResult<StatusCode> {
    info!("Activating account with ID: {}", id);
    let repo = ctx.repositories.account_repository();

    let mut account = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ClassifiedFault::not_found("Account", id))?;

    account.activate()?;
    repo.update(account).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn require_account_type(ctx: &AccountsContext, type_id: i32) -> FaultResult<AccountType> {
    ctx.repositories
        .account_type_repository()
        .find_by_id(type_id)
        .await?
        .ok_or_else(|| ClassifiedFault::not_found("AccountType", type_id))
}

fn typed_enums(request: &CreateAccountRequest) -> FaultResult<(AccountStatus, NormalBalance)> {
    let status = request
        .account_status()
        .ok_or_else(|| ClassifiedFault::invalid_field("status", "Status must be a valid AccountStatus value"))?;
    let normal_balance = request.account_normal_balance().ok_or_else(|| {
        ClassifiedFault::invalid_field("normalBalance", "NormalBalance must be a valid NormalBalance value")
    })?;
    Ok((status, normal_balance))
}
