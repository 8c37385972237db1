use clap::Parser;
use foodieco::application::vending_machine::VendingMachine;
use foodieco::domain::customer::{CURRENCY, Customer};
use foodieco::domain::drink::Drink;
use foodieco::domain::item::Item;
use foodieco::domain::money::Price;
use foodieco::domain::sandwich::Sandwich;
use foodieco::interfaces::csv::invoice_writer::{InvoiceRecord, InvoiceWriter};
use foodieco::interfaces::csv::order_reader::OrderReader;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders CSV file (customer,item,name,price,size,add_ons).
    /// Runs the sample orders when omitted.
    input: Option<PathBuf>,

    /// Discount percentage applied to every invoice read from the input file
    #[arg(long, default_value_t = Decimal::ZERO, allow_negative_numbers = true)]
    discount: Decimal,

    /// Print a CSV invoice summary instead of the order descriptions
    #[arg(long)]
    invoice_csv: bool,
}

/// Logs go to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut machine = VendingMachine::new();
    let orders = match cli.input {
        Some(path) => read_orders(&mut machine, path, cli.discount)?,
        None => sample_orders(&mut machine).into_diagnostic()?,
    };

    let invoices: Vec<InvoiceRecord> = orders
        .iter()
        .map(|(customer, discount)| {
            let invoice = machine.generate_invoice(customer, *discount);
            InvoiceRecord::new(customer, *discount, invoice)
        })
        .collect();

    if cli.invoice_csv {
        let stdout = io::stdout();
        let mut writer = InvoiceWriter::new(stdout.lock());
        writer.write_invoices(invoices).into_diagnostic()?;
    } else {
        for (index, ((customer, _), invoice)) in orders.iter().zip(&invoices).enumerate() {
            if index > 0 {
                println!();
            }
            println!("{customer}");
            println!("Final Bill: {} {}", invoice.invoice, CURRENCY);
        }
    }

    Ok(())
}

/// Groups the file's order lines per customer, first-seen order, and places one
/// order per customer. Bad lines are reported and skipped.
fn read_orders(
    machine: &mut VendingMachine,
    path: PathBuf,
    discount: Decimal,
) -> Result<Vec<(Customer, Decimal)>> {
    let file = File::open(path).into_diagnostic()?;
    let reader = OrderReader::new(file);

    let mut pending: Vec<(Customer, Vec<Item>)> = Vec::new();
    for entry_result in reader.entries() {
        match entry_result {
            Ok(entry) => {
                match pending
                    .iter_mut()
                    .find(|(customer, _)| customer.name() == entry.customer)
                {
                    Some((_, items)) => items.push(entry.item),
                    None => pending.push((Customer::new(entry.customer), vec![entry.item])),
                }
            }
            Err(e) => {
                warn!(error = %e, "Skipping order line");
                eprintln!("Error reading order line: {}", e);
            }
        }
    }

    Ok(pending
        .into_iter()
        .map(|(mut customer, items)| {
            machine.make_order(&mut customer, items);
            (customer, discount)
        })
        .collect())
}

fn sample_orders(
    machine: &mut VendingMachine,
) -> foodieco::error::Result<Vec<(Customer, Decimal)>> {
    let mut ali = Customer::new("Ali");
    let mut latte = Drink::new("Latte", Price::new(dec!(14.0))?);
    latte.set_size("super-large")?;
    latte.add_add_on("vanilla")?;
    latte.add_add_on("hazelnut")?;
    latte.add_add_on("whipped cream")?;
    let chicken = Sandwich::new("Chicken", Price::new(dec!(5.0))?);
    machine.make_order(&mut ali, vec![Item::from(latte), Item::from(chicken)]);

    let mut abdulaziz = Customer::new("Abdulaziz");
    let beef = Sandwich::new("Beef", Price::new(dec!(6.0))?);
    machine.make_order(&mut abdulaziz, vec![Item::from(beef)]);

    Ok(vec![(ali, dec!(0)), (abdulaziz, dec!(5))])
}
