// src/io/reporting.rs

use crate::error::LotSizingResult;
use crate::model::ProductionSchedule;
use crate::planning::LotSizingSolution;
use std::fmt;
use std::path::Path;
use tracing::info;

const CELL: usize = 10;
const LABEL: usize = 18;

/// The cost table with the `Z*_t` and `j*_t` rows underneath.
///
/// Rows are start periods, columns are planning horizons; cells never
/// computed (start after horizon) are left blank. Without a kept cost table
/// only the `Z` and `j` rows are printed.
#[derive(Debug, Clone, Copy)]
pub struct CostTableReport<'a>(pub &'a LotSizingSolution);

impl fmt::Display for CostTableReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = self.0;
        let periods = solution.schedule.periods();
        let rule = "-".repeat(LABEL + (CELL + 2) * periods);

        writeln!(f, "{:<LABEL$}| Planning horizon t", "Last setup")?;
        write!(f, "{:<LABEL$}|", "with production")?;
        for t in 1..=periods {
            write!(f, "{t:>CELL$} |")?;
        }
        writeln!(f)?;
        writeln!(f, "{rule}")?;

        if let Some(table) = &solution.cost_table {
            for (k, row) in table.rows() {
                write!(f, "{k:<LABEL$}|")?;
                for (t, value) in row.iter().enumerate() {
                    if table.is_computed(k, t + 1) {
                        write!(f, "{value:>CELL$.2} |")?;
                    } else {
                        write!(f, "{:>CELL$} |", "")?;
                    }
                }
                writeln!(f)?;
            }
            writeln!(f, "{rule}")?;
        }

        write!(f, "{:<LABEL$}|", "Z*_t")?;
        for z in solution.min_costs.iter().skip(1) {
            write!(f, "{z:>CELL$.2} |")?;
        }
        writeln!(f)?;
        write!(f, "{:<LABEL$}|", "j*_t")?;
        for j in solution.last_setup.iter().skip(1) {
            write!(f, "{j:>CELL$} |")?;
        }
        writeln!(f)?;
        writeln!(f, "{rule}")
    }
}

/// One line per period with a positive order.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleReport<'a>(pub &'a ProductionSchedule);

impl fmt::Display for ScheduleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for order in self.0.orders().iter().filter(|o| o.quantity > 0.0) {
            writeln!(f, "Produce {} units at t = {}", order.quantity, order.period)?;
        }
        Ok(())
    }
}

pub fn render_cost_table(solution: &LotSizingSolution) -> String {
    CostTableReport(solution).to_string()
}

pub fn render_schedule(schedule: &ProductionSchedule) -> String {
    ScheduleReport(schedule).to_string()
}

/// Writes the per-period schedule to a CSV file with a `period,quantity` header.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/plan.csv").
/// * `schedule` - The schedule produced by the planner.
pub fn write_schedule_csv(
    file_path: impl AsRef<Path>,
    schedule: &ProductionSchedule,
) -> LotSizingResult<()> {
    let path = file_path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    for order in schedule.orders() {
        wtr.serialize(order)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    info!(rows = schedule.periods(), file = %path.display(), "schedule exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LotSizingInstance;
    use crate::planning::{solve, solve_with, BuildOptions};
    use std::fmt::Write as _;

    #[test]
    fn table_leaves_lower_triangle_blank() {
        let solution = solve(&[10.0, 10.0, 10.0], 50.0, 1.0).unwrap();
        let text = render_cost_table(&solution);

        assert!(text.contains("80.00"));
        assert!(text.contains("Z*_t"));
        let row3 = text.lines().find(|line| line.starts_with('3')).unwrap();
        // only (3,3) is filled on the last row
        assert_eq!(row3.matches("110.00").count(), 1);
        assert!(!row3.contains("inf"));
    }

    #[test]
    fn table_layout_is_fixed_width() {
        let solution = solve(&[10.0, 10.0], 10.0, 1.0).unwrap();
        let text = render_cost_table(&solution);
        let lines: Vec<&str> = text.lines().collect();

        let rule = "-".repeat(LABEL + (CELL + 2) * 2);
        assert_eq!(lines[0], format!("{:<LABEL$}| Planning horizon t", "Last setup"));
        assert_eq!(lines[2], rule);
        let row = |label: &str, a: &str, b: &str| format!("{label:<LABEL$}|{a:>CELL$} |{b:>CELL$} |");
        assert_eq!(lines[3], row("1", "10.00", "20.00"));
        assert_eq!(lines[4], row("2", "", "20.00"));
        assert_eq!(lines[5], rule);
        assert_eq!(lines[6], row("Z*_t", "10.00", "20.00"));
        assert_eq!(lines[7], row("j*_t", "1", "1"));
        assert_eq!(lines.len(), 9);
        assert!(text.ends_with(&format!("{rule}\n")));
    }

    #[test]
    fn reports_write_into_any_formatter() {
        let solution = solve(&[5.0, 5.0], 10.0, 1.0).unwrap();
        let mut out = String::new();
        write!(out, "{}", ScheduleReport(&solution.schedule)).unwrap();
        write!(out, "{}", CostTableReport(&solution)).unwrap();

        assert!(out.starts_with("Produce 10 units at t = 1\n"));
        let expected = render_schedule(&solution.schedule) + &render_cost_table(&solution);
        assert_eq!(out, expected);
    }

    #[test]
    fn lean_solution_still_renders_z_and_j() {
        let instance = LotSizingInstance::new(vec![5.0, 5.0], 10.0, 1.0).unwrap();
        let options = BuildOptions {
            keep_cost_table: false,
        };
        let solution = solve_with(&instance, &options).unwrap();
        let text = render_cost_table(&solution);
        assert!(text.contains("j*_t"));
    }

    #[test]
    fn schedule_lists_only_real_orders() {
        let schedule = ProductionSchedule::from(vec![80.0, 0.0, 0.0, 130.0]);
        assert_eq!(
            render_schedule(&schedule),
            "Produce 80 units at t = 1\nProduce 130 units at t = 4\n"
        );
    }

    #[test]
    fn csv_export_has_one_row_per_period() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.csv");
        let schedule = ProductionSchedule::from(vec![30.0, 0.0, 0.0]);

        write_schedule_csv(&path, &schedule).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "period,quantity");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "1,30.0");
    }
}
