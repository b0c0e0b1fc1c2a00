//! Terminal rendering of the dashboard report and the raw tables.

use crate::RawTable;
use analyzer::DashboardReport;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use core_types::Ratio;
use dataset::Snapshot;
use rust_decimal::{Decimal, RoundingStrategy};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

fn align_right(table: &mut Table, columns: &[usize]) {
    for &index in columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn section(title: &str) {
    println!("\n{title}");
}

/// Currency with two decimals and thousands separators, e.g. `$1,234.56`.
pub fn money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}${grouped}.{fraction}")
}

/// A return ratio as a percentage, e.g. `1900.00%`. Ratios too large to
/// scale are printed as a plain multiple with an `x` suffix.
pub fn percent(value: Decimal) -> String {
    match value.checked_mul(Decimal::ONE_HUNDRED) {
        Some(scaled) => format!("{scaled:.2}%"),
        None => format!("{value:.2}x"),
    }
}

fn ratio_percent(value: Option<Ratio>) -> String {
    match value {
        Some(Ratio::Finite(value)) => percent(value),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    }
}

fn ratio_plain(value: Option<Ratio>) -> String {
    match value {
        Some(Ratio::Finite(value)) => format!("{value:.2}"),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    }
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub fn print_report(report: &DashboardReport<'_>, with_records: bool) {
    let kpis = &report.kpis;
    let mut table = new_table(&["Total Revenue", "Total Spend", "ROI", "ROAS"]);
    table.add_row(vec![
        money(kpis.total_revenue),
        money(kpis.total_spend),
        percent(kpis.roi),
        format!("{:.2}", kpis.roas),
    ]);
    section(&format!("Campaign Performance ({} conversion events)", report.records.len()));
    println!("{table}");

    let mut table = new_table(&["Influencer", "Revenue"]);
    for row in &report.revenue_by_influencer {
        table.add_row(vec![row.name.clone(), money(row.revenue)]);
    }
    align_right(&mut table, &[1]);
    section("Revenue by Influencer");
    println!("{table}");

    let mut table = new_table(&["#", "Influencer", "Revenue"]);
    for (rank, row) in report.top_influencers.iter().enumerate() {
        table.add_row(vec![(rank + 1).to_string(), row.name.clone(), money(row.revenue)]);
    }
    align_right(&mut table, &[0, 2]);
    section(&format!("Top {} Influencers", report.top_n.get()));
    println!("{table}");

    let mut table = new_table(&["Category", "Revenue"]);
    for row in &report.revenue_by_category {
        table.add_row(vec![row.category.to_string(), money(row.revenue)]);
    }
    align_right(&mut table, &[1]);
    section("Revenue by Category");
    println!("{table}");

    let mut table = new_table(&["Tracking ID", "Influencer", "ROI", "Revenue", "Total Payout"]);
    for row in &report.low_efficiency {
        table.add_row(vec![
            row.tracking_id.to_string(),
            or_dash(row.name.as_deref()),
            ratio_percent(Some(row.roi)),
            money(row.revenue),
            row.total_payout.map_or_else(|| "-".to_string(), money),
        ]);
    }
    align_right(&mut table, &[0, 2, 3, 4]);
    section("Low-Efficiency Conversions (ROI below 100%)");
    println!("{table}");

    section("Insights");
    for line in report.insights.narrative() {
        println!("  - {line}");
    }

    if with_records {
        print_records(report);
    }
}

fn print_records(report: &DashboardReport<'_>) {
    let mut table = new_table(&[
        "Tracking ID",
        "Date",
        "Influencer",
        "Platform",
        "Campaign",
        "Product",
        "Revenue",
        "Total Payout",
        "ROI",
        "ROAS",
    ]);
    for record in &report.records {
        table.add_row(vec![
            record.event.tracking_id.to_string(),
            record.event.date.format(DATE_FORMAT).to_string(),
            or_dash(record.name()),
            or_dash(record.platform()),
            record.campaign().to_string(),
            record.product().to_string(),
            money(record.revenue()),
            record.total_payout().map_or_else(|| "-".to_string(), money),
            ratio_percent(record.roi),
            ratio_plain(record.roas),
        ]);
    }
    align_right(&mut table, &[0, 6, 7, 8, 9]);
    section("Filtered Records");
    println!("{table}");

    let mut table = new_table(&["Influencer", "Platform", "Followers", "Revenue"]);
    for point in &report.reach {
        table.add_row(vec![
            point.name.clone(),
            point.platform.to_string(),
            point.follower_count.to_string(),
            money(point.revenue),
        ]);
    }
    align_right(&mut table, &[2, 3]);
    section("Follower Count vs Revenue");
    println!("{table}");
}

pub fn print_raw(snapshot: &Snapshot, which: RawTable, limit: usize) {
    let (title, total, table) = match which {
        RawTable::Influencers => {
            let mut table = new_table(&["ID", "Name", "Category", "Gender", "Followers", "Platform"]);
            for row in snapshot.influencers().iter().take(limit) {
                table.add_row(vec![
                    row.influencer_id.to_string(),
                    row.name.clone(),
                    row.category.to_string(),
                    row.gender.to_string(),
                    row.follower_count.to_string(),
                    row.platform.to_string(),
                ]);
            }
            ("Influencers", snapshot.influencers().len(), table)
        }
        RawTable::Posts => {
            let mut table = new_table(&[
                "Post ID", "Influencer", "Platform", "Date", "URL", "Caption", "Reach", "Likes",
                "Comments",
            ]);
            for row in snapshot.posts().iter().take(limit) {
                table.add_row(vec![
                    row.post_id.to_string(),
                    row.influencer_id.to_string(),
                    row.platform.to_string(),
                    row.date.format(DATE_FORMAT).to_string(),
                    row.url.clone(),
                    row.caption.clone(),
                    row.reach.to_string(),
                    row.likes.to_string(),
                    row.comments.to_string(),
                ]);
            }
            ("Posts", snapshot.posts().len(), table)
        }
        RawTable::Tracking => {
            let mut table = new_table(&[
                "Tracking ID", "Source", "Campaign", "Influencer", "User", "Product", "Date",
                "Orders", "Revenue",
            ]);
            for row in snapshot.events().iter().take(limit) {
                table.add_row(vec![
                    row.tracking_id.to_string(),
                    row.source.to_string(),
                    row.campaign.to_string(),
                    row.influencer_id.to_string(),
                    row.user_id.clone(),
                    row.product.to_string(),
                    row.date.format(DATE_FORMAT).to_string(),
                    row.orders.to_string(),
                    money(row.revenue),
                ]);
            }
            ("Tracking Data", snapshot.events().len(), table)
        }
        RawTable::Payouts => {
            let mut table = new_table(&["Influencer", "Basis", "Rate", "Orders", "Total Payout"]);
            for row in snapshot.payouts().iter().take(limit) {
                table.add_row(vec![
                    row.influencer_id.to_string(),
                    row.basis.to_string(),
                    money(row.rate),
                    row.orders.to_string(),
                    money(row.total_payout),
                ]);
            }
            ("Payouts", snapshot.payouts().len(), table)
        }
    };

    section(&format!("{title} (showing {} of {total})", total.min(limit)));
    println!("{table}");
}
