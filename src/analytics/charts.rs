//! ECharts configuration for the analytics page.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Orient, Tooltip, Trigger,
    },
    series::{Pie, bar::Bar},
};
use maud::{Markup, PreEscaped, html};

use crate::{analytics::aggregation::Analytics, html::HeadElement};

/// A chart and the ID of the element it is drawn into.
pub(super) struct AnalyticsChart {
    pub id: &'static str,
    /// Serialised ECharts option object.
    pub options: String,
}

/// Build the charts shown on the analytics page.
pub(super) fn build_analytics_charts(analytics: &Analytics) -> [AnalyticsChart; 2] {
    [
        AnalyticsChart {
            id: "category-chart",
            options: category_chart(analytics).to_string(),
        },
        AnalyticsChart {
            id: "monthly-chart",
            options: monthly_chart(analytics).to_string(),
        },
    ]
}

/// One empty container per chart, side by side on wide screens.
pub(super) fn charts_view(charts: &[AnalyticsChart]) -> Markup {
    html! {
        section id="charts" class="mb-4 w-full"
        {
            div class="grid gap-4 lg:grid-cols-2"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="h-[380px] rounded-lg bg-white p-2 shadow-sm dark:bg-slate-100"
                    {}
                }
            }
        }
    }
}

/// Draws each chart once the page has loaded.
///
/// Options are written into the script as a JS object keyed by element ID.
/// Charts follow the system dark mode setting and resize with the window.
pub(super) fn charts_script(charts: &[AnalyticsChart]) -> HeadElement {
    let options = charts
        .iter()
        .map(|chart| format!("{:?}: {}", chart.id, chart.options))
        .collect::<Vec<_>>()
        .join(",\n");

    let script = format!(
        r#"document.addEventListener("DOMContentLoaded", () => {{
    const chartOptions = {{
{options}
    }};
    const darkMode = window.matchMedia("(prefers-color-scheme: dark)");

    for (const [id, option] of Object.entries(chartOptions)) {{
        const element = document.getElementById(id);
        if (!element) continue;

        const chart = echarts.init(element);
        chart.setOption(option);
        chart.setTheme(darkMode.matches ? "dark" : "default");

        darkMode.addEventListener("change", (event) =>
            chart.setTheme(event.matches ? "dark" : "default"));
        window.addEventListener("resize", () => chart.resize());
    }}
}});"#
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

fn category_chart(analytics: &Analytics) -> Chart {
    let data: Vec<(f64, &str)> = analytics
        .category_totals
        .iter()
        .map(|(category, total)| (*total, category.as_str()))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Spending by Category")
                .left("center"),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(
            Legend::new()
                .orient(Orient::Vertical)
                .left("left")
                .top("10%"),
        )
        .series(
            Pie::new()
                .name("Category")
                .radius(vec!["40%", "70%"])
                .center(vec!["60%", "55%"])
                .data(data),
        )
}

fn monthly_chart(analytics: &Analytics) -> Chart {
    let labels: Vec<String> = analytics.monthly_totals.keys().cloned().collect();
    let values: Vec<f64> = analytics.monthly_totals.values().copied().collect();

    Chart::new()
        .title(Title::new().text("Monthly Spending"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().data(labels).type_(AxisType::Category))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Bar::new().name("Spending").data(values))
}

/// Formats chart values as rupees with Indian digit grouping.
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "value",
        "return value == null \
            ? '-' \
            : value.toLocaleString('en-IN', { style: 'currency', currency: 'INR' });",
    )
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{analytics::aggregation::calculate_analytics, expense::Expense, html::HeadElement};

    use super::{build_analytics_charts, charts_script};

    fn sample_expenses() -> Vec<Expense> {
        [
            (1, 120.0, "Groceries", date!(2024 - 01 - 03)),
            (2, 80.0, "Entertainment", date!(2024 - 02 - 14)),
        ]
        .into_iter()
        .map(|(id, amount, category, date)| Expense {
            id,
            amount,
            category: category.to_owned(),
            date,
            description: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        })
        .collect()
    }

    #[test]
    fn category_chart_contains_each_category() {
        let charts = build_analytics_charts(&calculate_analytics(&sample_expenses()));

        assert_eq!(charts[0].id, "category-chart");
        assert!(charts[0].options.contains("\"pie\""));
        assert!(charts[0].options.contains("Groceries"));
        assert!(charts[0].options.contains("Entertainment"));
    }

    #[test]
    fn monthly_chart_labels_each_month() {
        let charts = build_analytics_charts(&calculate_analytics(&sample_expenses()));

        assert_eq!(charts[1].id, "monthly-chart");
        assert!(charts[1].options.contains("\"bar\""));
        assert!(charts[1].options.contains("2024-01"));
        assert!(charts[1].options.contains("2024-02"));
    }

    #[test]
    fn script_initialises_every_chart() {
        let charts = build_analytics_charts(&calculate_analytics(&sample_expenses()));

        let HeadElement::ScriptSource(script) = charts_script(&charts) else {
            panic!("want inline script");
        };

        assert!(script.0.contains("\"category-chart\": {"));
        assert!(script.0.contains("\"monthly-chart\": {"));
        assert!(script.0.contains("echarts.init(element)"));
    }
}
