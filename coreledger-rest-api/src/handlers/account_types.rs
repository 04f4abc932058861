//! Account type management endpoints

use axum::{extract::State, http::StatusCode, Json};
use coreledger_api_types::{AccountTypeDto, CreateAccountTypeRequest, UpdateAccountTypeRequest};
use coreledger_core::{AccountType, ClassifiedFault};
use coreledger_web::{ApiResult, IdPath, ValidatedJson};
use tracing::info;

use crate::context::AccountTypesContext;

const DUPLICATE_DESCRIPTION: &str = "Account type with this description already exists";

/// List all account types
pub async fn list_account_types(State(ctx): State<AccountTypesContext>) -> ApiResult<Json<Vec<AccountTypeDto>>> {
    let account_types = ctx.repositories.account_type_repository().find_all().await?;
    Ok(Json(account_types.into_iter().map(AccountTypeDto::from).collect()))
}

/// Get a specific account type by ID
pub async fn get_account_type(
    State(ctx): State<AccountTypesContext>,
    IdPath(id): IdPath,
) -> ApiResult<Json<AccountTypeDto>> {
    let account_type = ctx
        .repositories
        .account_type_repository()
        .find_by_id(id)
        .await?
        .ok_or_else(|| ClassifiedFault::not_found("AccountType", id))?;

    Ok(Json(AccountTypeDto::from(account_type)))
}

/// Create a new account type
pub async fn create_account_type(
    State(ctx): State<AccountTypesContext>,
    ValidatedJson(request): ValidatedJson<CreateAccountTypeRequest>,
) -> ApiResult<(StatusCode, Json<AccountTypeDto>)> {
    info!("Creating account type: {}", request.description);
    let repo = ctx.repositories.account_type_repository();

    if repo.find_by_description(&request.description).await?.is_some() {
        return Err(ClassifiedFault::validation(DUPLICATE_DESCRIPTION).into());
    }

    let created = repo.create(AccountType::create(&request.description)?).await?;
    info!(account_type_id = created.id, "Created account type");

    Ok((StatusCode::CREATED, Json(AccountTypeDto::from(created))))
}

/// Update an existing account type
pub async fn update_account_type(
    State(ctx): State<AccountTypesContext>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateAccountTypeRequest>,
) -> ApiResult<StatusCode> {
    info!("Updating account type with ID: {}", id);
    let repo = ctx.repositories.account_type_repository();

    let mut account_type = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ClassifiedFault::not_found("AccountType", id))?;

    if let Some(existing) = repo.find_by_description(&request.description).await? {
        if existing.id != id {
            return Err(ClassifiedFault::validation(DUPLICATE_DESCRIPTION).into());
        }
    }

    account_type.update_description(&request.description)?;
    repo.update(account_type).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an account type
pub async fn delete_account_type(State(ctx): State<AccountTypesContext>, IdPath(id): IdPath) -> ApiResult<StatusCode> {
    info!("Deleting account type with ID: {}", id);

    if !ctx.repositories.account_type_repository().delete(id).await? {
        return Err(ClassifiedFault::not_found("AccountType", id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
