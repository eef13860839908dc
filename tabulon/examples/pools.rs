//! Renders a DEX pools table over a static sample of subgraph data:
//! sortable volume/TVL columns, page navigation, and the loading skeleton.
//!
//! Run with `cargo run --example pools`.

use std::fs::File;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use simplelog::{Config, LevelFilter, WriteLogger};
use tabulon::{CellValue, Column, Table};

/// One token of a pair, as the pools subgraph serves it.
#[derive(Debug, Clone, Deserialize)]
struct Token {
    symbol: String,
    #[allow(dead_code)]
    decimals: u32,
}

/// One liquidity pair. Decimal amounts arrive as strings on the wire.
#[derive(Debug, Clone, Deserialize)]
struct Pair {
    #[allow(dead_code)]
    id: String,
    token0: Token,
    token1: Token,
    #[serde(rename = "totalSupply")]
    total_supply: String,
    #[serde(rename = "volumeUSD")]
    volume_usd: String,
    #[serde(rename = "reserveUSD")]
    reserve_usd: String,
}

fn decimal_cell(raw: &str) -> CellValue {
    match Decimal::from_str(raw) {
        Ok(d) => CellValue::Decimal(d),
        Err(_) => CellValue::Null,
    }
}

fn usd(raw: &str) -> String {
    match Decimal::from_str(raw) {
        Ok(d) => format!("${:.2}", d),
        Err(_) => "-".to_string(),
    }
}

fn columns() -> Vec<Column<Pair>> {
    vec![
        Column::new("pool", |p: &Pair| {
            CellValue::from(format!("{} / {}", p.token0.symbol, p.token1.symbol))
        })
        .with_header("Pool"),
        Column::new("volumeUSD", |p: &Pair| decimal_cell(&p.volume_usd))
            .with_header("Volume")
            .with_cell_render(|p: &Pair| usd(&p.volume_usd)),
        Column::new("reserveUSD", |p: &Pair| decimal_cell(&p.reserve_usd))
            .with_header("TVL")
            .with_cell_render(|p: &Pair| usd(&p.reserve_usd)),
        Column::new("totalSupply", |p: &Pair| decimal_cell(&p.total_supply))
            .with_header("LP Supply")
            .sortable(false),
    ]
}

fn sample_pairs() -> Vec<Pair> {
    serde_json::from_str(SAMPLE_POOLS).expect("sample dataset is valid")
}

fn main() {
    let log_file = File::create("pools.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut table = Table::new(columns(), vec![]).expect("columns are valid");

    // Before data arrives the table shows the loading skeleton.
    table.set_loading(true);
    println!("-- loading --");
    println!("{}", table.view().expect("view").to_text());

    // Data arrived: highest volume first, like the pools page.
    table.set_loading(false);
    table.set_rows(sample_pairs());
    table.toggle_sort("volumeUSD");
    table.toggle_sort("volumeUSD"); // second click: descending

    println!("-- pools by volume --");
    println!("{}", table.view().expect("view").to_text());

    table.next_page();
    println!("-- next page --");
    println!("{}", table.view().expect("view").to_text());
}

const SAMPLE_POOLS: &str = r#"[
  {"id": "0x01", "token0": {"symbol": "WETH", "decimals": 18}, "token1": {"symbol": "USDC", "decimals": 6},
   "totalSupply": "418322.91", "volumeUSD": "1250431.52", "reserveUSD": "5203311.08"},
  {"id": "0x02", "token0": {"symbol": "WBTC", "decimals": 8}, "token1": {"symbol": "WETH", "decimals": 18},
   "totalSupply": "1204.77", "volumeUSD": "980123.04", "reserveUSD": "3120890.40"},
  {"id": "0x03", "token0": {"symbol": "DAI", "decimals": 18}, "token1": {"symbol": "USDC", "decimals": 6},
   "totalSupply": "901233.00", "volumeUSD": "402551.96", "reserveUSD": "1890244.17"},
  {"id": "0x04", "token0": {"symbol": "WETH", "decimals": 18}, "token1": {"symbol": "DAI", "decimals": 18},
   "totalSupply": "55012.34", "volumeUSD": "380900.11", "reserveUSD": "990412.73"},
  {"id": "0x05", "token0": {"symbol": "LINK", "decimals": 18}, "token1": {"symbol": "WETH", "decimals": 18},
   "totalSupply": "20441.80", "volumeUSD": "210344.87", "reserveUSD": "640211.55"},
  {"id": "0x06", "token0": {"symbol": "UNI", "decimals": 18}, "token1": {"symbol": "WETH", "decimals": 18},
   "totalSupply": "18230.15", "volumeUSD": "150233.60", "reserveUSD": "480114.92"},
  {"id": "0x07", "token0": {"symbol": "USDT", "decimals": 6}, "token1": {"symbol": "USDC", "decimals": 6},
   "totalSupply": "3304411.22", "volumeUSD": "120988.31", "reserveUSD": "7120455.60"},
  {"id": "0x08", "token0": {"symbol": "AAVE", "decimals": 18}, "token1": {"symbol": "WETH", "decimals": 18},
   "totalSupply": "5120.03", "volumeUSD": "98130.77", "reserveUSD": "310229.14"},
  {"id": "0x09", "token0": {"symbol": "CRV", "decimals": 18}, "token1": {"symbol": "WETH", "decimals": 18},
   "totalSupply": "88012.50", "volumeUSD": "64411.02", "reserveUSD": "150988.36"},
  {"id": "0x0a", "token0": {"symbol": "SNX", "decimals": 18}, "token1": {"symbol": "WETH", "decimals": 18},
   "totalSupply": "40233.70", "volumeUSD": "51200.45", "reserveUSD": "122300.18"},
  {"id": "0x0b", "token0": {"symbol": "MKR", "decimals": 18}, "token1": {"symbol": "DAI", "decimals": 18},
   "totalSupply": "1209.88", "volumeUSD": "40211.90", "reserveUSD": "98122.63"},
  {"id": "0x0c", "token0": {"symbol": "COMP", "decimals": 18}, "token1": {"symbol": "USDC", "decimals": 6},
   "totalSupply": "7801.42", "volumeUSD": "30100.27", "reserveUSD": "77455.09"}
]"#;
