//! Shared test fixtures: contract wrappers, a recording transport, a
//! forwarding processor and a fully wired suite.

#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
    Uint128, WasmMsg,
};
use cw20::{Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, BalanceResponse};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use cw_storage_plus::Item;

use bridge::msg::{ExecuteMsg, InstantiateMsg};
use bridge::AuxData;
use common::AssetInfo;

// ============================================================================
// Identities & Fixtures
// ============================================================================

pub const OWNER: &str = "terra1owner";
pub const PROCESSOR: &str = "terra1processor";
pub const STRANGER: &str = "terra1stranger";

pub const DOMAIN_A: u32 = 6_648_936;
pub const DOMAIN_B: u32 = 1_634_886_255;

pub const RECIPIENT_A: &str = "0x00000000000000000000000000000000000000a1";
pub const RECIPIENT_B: &str = "0x00000000000000000000000000000000000000b2";

pub const INITIAL_BALANCE: u128 = 10_000_000;

pub fn aux(domain_index: u32, destination_index: u32, slippage_bps: u32, fee_bps: u32) -> u64 {
    AuxData {
        domain_index,
        destination_index,
        slippage_bps,
        relayer_fee_bps: fee_bps,
    }
    .encode()
}

// ============================================================================
// Contract Wrappers
// ============================================================================

pub fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        bridge::contract::execute,
        bridge::contract::instantiate,
        bridge::contract::query,
    )
    .with_reply(bridge::contract::reply);
    Box::new(contract)
}

pub fn contract_registry() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        address_registry::contract::execute,
        address_registry::contract::instantiate,
        address_registry::contract::query,
    );
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Mock Transport
// ============================================================================

/// Arguments of the last `Xcall` the transport accepted
#[cw_serde]
pub struct RecordedXcall {
    pub sender: Addr,
    pub destination: u32,
    pub to: String,
    pub asset: String,
    pub delegate: String,
    pub amount: Uint128,
    pub slippage: u64,
    pub call_data: Binary,
    pub relayer_fee: Uint128,
}

#[cw_serde]
pub enum TransportMsg {
    Xcall {
        destination: u32,
        to: String,
        asset: String,
        delegate: String,
        amount: Uint128,
        slippage: u64,
        call_data: Binary,
        relayer_fee: Uint128,
    },
    /// Execute `msg` on `contract` from inside every following `Xcall`
    SetCallback { contract: String, msg: Binary },
}

#[cw_serde]
pub enum TransportQueryMsg {
    LastXcall {},
    XcallCount {},
}

#[cw_serde]
struct Callback {
    contract: String,
    msg: Binary,
}

const LAST_XCALL: Item<RecordedXcall> = Item::new("last_xcall");
const XCALL_COUNT: Item<u64> = Item::new("xcall_count");
const CALLBACK: Item<Callback> = Item::new("callback");

fn transport_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    XCALL_COUNT.save(deps.storage, &0)?;
    Ok(Response::new())
}

fn transport_execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: TransportMsg,
) -> StdResult<Response> {
    match msg {
        TransportMsg::Xcall {
            destination,
            to,
            asset,
            delegate,
            amount,
            slippage,
            call_data,
            relayer_fee,
        } => {
            let pull = WasmMsg::Execute {
                contract_addr: asset.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: info.sender.to_string(),
                    recipient: env.contract.address.to_string(),
                    amount: amount + relayer_fee,
                })?,
                funds: vec![],
            };

            LAST_XCALL.save(
                deps.storage,
                &RecordedXcall {
                    sender: info.sender,
                    destination,
                    to,
                    asset,
                    delegate,
                    amount,
                    slippage,
                    call_data,
                    relayer_fee,
                },
            )?;
            XCALL_COUNT.update(deps.storage, |count| -> StdResult<_> { Ok(count + 1) })?;

            let mut response = Response::new().add_message(pull);
            if let Some(callback) = CALLBACK.may_load(deps.storage)? {
                response = response.add_message(WasmMsg::Execute {
                    contract_addr: callback.contract,
                    msg: callback.msg,
                    funds: vec![],
                });
            }
            Ok(response)
        }
        TransportMsg::SetCallback { contract, msg } => {
            CALLBACK.save(deps.storage, &Callback { contract, msg })?;
            Ok(Response::new())
        }
    }
}

fn transport_query(deps: Deps, _env: Env, msg: TransportQueryMsg) -> StdResult<Binary> {
    match msg {
        TransportQueryMsg::LastXcall {} => to_json_binary(&LAST_XCALL.may_load(deps.storage)?),
        TransportQueryMsg::XcallCount {} => to_json_binary(&XCALL_COUNT.load(deps.storage)?),
    }
}

pub fn contract_transport() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(transport_execute, transport_instantiate, transport_query);
    Box::new(contract)
}

// ============================================================================
// Mock Processor (forwarding proxy)
// ============================================================================

#[cw_serde]
pub enum ProxyMsg {
    /// Execute `msg` on `contract` with the proxy as sender
    Run { contract: String, msg: Binary },
}

fn proxy_instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn proxy_execute(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ProxyMsg,
) -> StdResult<Response> {
    match msg {
        ProxyMsg::Run { contract, msg } => Ok(Response::new().add_message(WasmMsg::Execute {
            contract_addr: contract,
            msg,
            funds: vec![],
        })),
    }
}

fn proxy_query(_deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
    to_json_binary(&Empty {})
}

pub fn contract_proxy() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(proxy_execute, proxy_instantiate, proxy_query);
    Box::new(contract)
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub app: App,
    pub bridge: Addr,
    pub registry: Addr,
    pub transport: Addr,
    pub token: Addr,
    pub processor: Addr,
    pub owner: Addr,
}

/// Suite with a plain-account processor and the given fee ceiling.
pub fn setup(fee_ceiling: Option<Uint128>) -> Suite {
    build_suite(fee_ceiling, false)
}

/// Suite whose processor is a forwarding proxy contract.
pub fn setup_with_proxy_processor(fee_ceiling: Option<Uint128>) -> Suite {
    build_suite(fee_ceiling, true)
}

fn build_suite(fee_ceiling: Option<Uint128>, proxy_processor: bool) -> Suite {
    let mut app = App::default();
    let owner = Addr::unchecked(OWNER);

    let registry_code = app.store_code(contract_registry());
    let registry = app
        .instantiate_contract(
            registry_code,
            owner.clone(),
            &address_registry::msg::InstantiateMsg {
                addresses: vec![RECIPIENT_A.to_string(), RECIPIENT_B.to_string()],
            },
            &[],
            "address-registry",
            None,
        )
        .unwrap();

    let transport_code = app.store_code(contract_transport());
    let transport = app
        .instantiate_contract(transport_code, owner.clone(), &Empty {}, &[], "transport", None)
        .unwrap();

    let processor = if proxy_processor {
        let proxy_code = app.store_code(contract_proxy());
        app.instantiate_contract(proxy_code, owner.clone(), &Empty {}, &[], "processor", None)
            .unwrap()
    } else {
        Addr::unchecked(PROCESSOR)
    };

    let cw20_code = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_code,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Test Token".to_string(),
                symbol: "TST".to_string(),
                decimals: 18,
                initial_balances: vec![Cw20Coin {
                    address: processor.to_string(),
                    amount: Uint128::from(INITIAL_BALANCE),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "cw20-test",
            None,
        )
        .unwrap();

    let bridge_code = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                processor: processor.to_string(),
                transport: transport.to_string(),
                address_registry: registry.to_string(),
                fee_ceiling,
            },
            &[],
            "xdomain-bridge",
            Some(owner.to_string()),
        )
        .unwrap();

    app.execute_contract(
        owner.clone(),
        bridge.clone(),
        &ExecuteMsg::AppendDomains {
            domain_ids: vec![DOMAIN_A, DOMAIN_B],
        },
        &[],
    )
    .unwrap();

    Suite {
        app,
        bridge,
        registry,
        transport,
        token,
        processor,
        owner,
    }
}

impl Suite {
    pub fn cw20_asset(&self) -> AssetInfo {
        AssetInfo::Cw20 {
            contract_addr: self.token.to_string(),
        }
    }

    /// Processor grants the bridge `amount` of the token.
    pub fn approve_bridge(&mut self, amount: u128) {
        let msg = Cw20ExecuteMsg::IncreaseAllowance {
            spender: self.bridge.to_string(),
            amount: Uint128::from(amount),
            expires: None,
        };
        self.run_as_processor(self.token.clone(), &msg).unwrap();
    }

    pub fn convert(
        &mut self,
        sender: &Addr,
        input_asset: AssetInfo,
        total_input_value: u128,
        aux_data: u64,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.bridge.clone(),
            &ExecuteMsg::Convert {
                input_asset,
                total_input_value: Uint128::from(total_input_value),
                aux_data,
            },
            &[],
        )
    }

    pub fn convert_as_processor(
        &mut self,
        total_input_value: u128,
        aux_data: u64,
    ) -> anyhow::Result<AppResponse> {
        let msg = ExecuteMsg::Convert {
            input_asset: self.cw20_asset(),
            total_input_value: Uint128::from(total_input_value),
            aux_data,
        };
        self.run_as_processor(self.bridge.clone(), &msg)
    }

    /// Execute `msg` on `contract` as the processor, through the proxy when
    /// the processor is a contract.
    pub fn run_as_processor<T: serde::Serialize + std::fmt::Debug>(
        &mut self,
        contract: Addr,
        msg: &T,
    ) -> anyhow::Result<AppResponse> {
        if self.processor.as_str() == PROCESSOR {
            self.app
                .execute_contract(self.processor.clone(), contract, msg, &[])
        } else {
            let run = ProxyMsg::Run {
                contract: contract.to_string(),
                msg: to_json_binary(msg)?,
            };
            self.app.execute_contract(
                Addr::unchecked(STRANGER),
                self.processor.clone(),
                &run,
                &[],
            )
        }
    }

    pub fn balance(&self, account: &Addr) -> Uint128 {
        let response: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.token,
                &Cw20QueryMsg::Balance {
                    address: account.to_string(),
                },
            )
            .unwrap();
        response.balance
    }

    pub fn last_xcall(&self) -> Option<RecordedXcall> {
        self.app
            .wrap()
            .query_wasm_smart(&self.transport, &TransportQueryMsg::LastXcall {})
            .unwrap()
    }

    pub fn xcall_count(&self) -> u64 {
        self.app
            .wrap()
            .query_wasm_smart(&self.transport, &TransportQueryMsg::XcallCount {})
            .unwrap()
    }
}

/// Root cause of a failed execution, as text.
pub fn root_error(result: anyhow::Result<AppResponse>) -> String {
    result.unwrap_err().root_cause().to_string()
}
