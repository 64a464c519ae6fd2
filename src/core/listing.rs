use crate::core::filter::Facets;
use crate::models::JobPosting;
use crate::ui::messages::{field, info};
use crate::utils::formatting::{bold, colorize_status, or_dash, truncate_chars};
use crate::utils::table::{Column, Table};

pub struct ListLogic;

impl ListLogic {
    /// Print the count line followed by either a compact table or detail blocks.
    pub fn print(jobs: &[JobPosting], details: bool, preview: usize) {
        println!("{} jobs in database", jobs.len());

        if jobs.is_empty() {
            info("No jobs in database. Run a scrape!");
            return;
        }

        if details {
            for job in jobs {
                Self::print_details(job, preview);
            }
        } else {
            println!();
            print!("{}", Self::table(jobs).render());
        }
    }

    pub fn table(jobs: &[JobPosting]) -> Table {
        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("STATUS", 11),
            Column::new("DATE", 10),
            Column::new("SOURCE", 8),
            Column::new("TITLE", 40),
            Column::new("COMPANY", 24),
            Column::new("LOCATION", 24),
        ]);

        for job in jobs {
            table.add_row(vec![
                job.id.to_string(),
                colorize_status(job.status),
                or_dash(&job.date_posted).to_string(),
                or_dash(&job.source).to_string(),
                or_dash(&job.title).to_string(),
                or_dash(&job.company).to_string(),
                or_dash(&job.location).to_string(),
            ]);
        }
        table
    }

    /// Detail block: heading, fields and a description preview.
    pub fn print_details(job: &JobPosting, preview: usize) {
        println!("\n{}", bold(&format!("#{} {}", job.id, job.headline())));
        field("Company", or_dash(&job.company));
        field("Location", or_dash(&job.location));
        field("Date", or_dash(&job.date_posted));
        field("Source", or_dash(&job.source));
        field(
            "Status",
            format!("{} ({})", job.status.label(), colorize_status(job.status)),
        );
        field("URL", &job.url);
        if let Some(address) = &job.address {
            field("Address", address);
        }

        let description = truncate_chars(&job.description, preview, "");
        println!("{}", bold("Description:"));
        for line in textwrap::wrap(&description, 100) {
            println!("  {}", line);
        }
        if !job.description.is_empty() {
            println!("  ...");
        }
    }

    pub fn print_facets(facets: &Facets) {
        let groups = [
            ("Companies", &facets.companies),
            ("Cities", &facets.cities),
            ("Sources", &facets.sources),
        ];

        for (label, values) in groups {
            println!("{} ({}):", bold(label), values.len());
            for v in values {
                println!("  - {}", v);
            }
        }
    }
}
