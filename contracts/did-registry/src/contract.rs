use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::ledger;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, DidRecord, CONFIG};

const CONTRACT_NAME: &str = "crates.io:did-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        scan_range: msg.scan_range.unwrap_or_default(),
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("scan_start", config.scan_range.start)
        .add_attribute(
            "scan_end",
            config.scan_range.end.unwrap_or_else(|| "none".to_string()),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::InitLedger {} => execute_init_ledger(deps),
        ExecuteMsg::CreateDid {
            key,
            id,
            authentication_id,
            authentication_type,
            authentication_controller,
            authentication_public_key_perm,
            service_id,
            service_type,
            service_end_point,
        } => {
            let did = DidRecord {
                id,
                authentication_id,
                authentication_type,
                authentication_controller,
                authentication_public_key_perm,
                service_id,
                service_type,
                service_end_point,
            };
            execute_create_did(deps, key, did)
        }
    }
}

pub fn execute_init_ledger(deps: DepsMut) -> Result<Response, ContractError> {
    let count = ledger::init_ledger(deps.storage)?;

    Ok(Response::new()
        .add_attribute("method", "init_ledger")
        .add_attribute("count", count.to_string()))
}

pub fn execute_create_did(
    deps: DepsMut,
    key: String,
    did: DidRecord,
) -> Result<Response, ContractError> {
    ledger::create_did(deps.storage, &key, &did)?;

    Ok(Response::new()
        .add_attribute("method", "create_did")
        .add_attribute("key", key)
        .add_attribute("id", did.id))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let res = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::QueryDidByKey { key } => {
            to_json_binary(&ledger::query_did_by_key(deps.storage, &key)?)
        }
        QueryMsg::QueryDidById { id } => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ledger::query_did_by_id(
                deps.storage,
                &config.scan_range,
                &id,
            )?)
        }
        QueryMsg::QueryAllDids {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ledger::query_all_dids(deps.storage, &config.scan_range)?)
        }
    }?;
    Ok(res)
}

fn query_config(deps: Deps) -> Result<ConfigResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        scan_range: config.scan_range,
    })
}
