mod args;
mod config;
mod reader;
mod writer;

use ppd::{input::InputRecord, Dispatcher, PaymentReport, Result};

use std::path::PathBuf;

struct Outcome {
    report: PaymentReport,
    receipt: Option<String>,
}

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let (input_path, output_mode) = args::parse_args()?;

    let outcomes = process_payments(input_path)?;

    log::debug!("Process complete. Beginning report...");

    match output_mode {
        args::OutputMode::Summary => report_to_std_out(&outcomes)?,
        args::OutputMode::Receipts => print_receipts(&outcomes),
    }

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read the input file and run each record through dispatch, validation, and
/// simulated execution
fn process_payments(input_path: PathBuf) -> Result<Vec<Outcome>> {
    let mut rdr = reader::build_csv_reader(input_path)?;

    let mut outcomes = vec![];

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputRecord>() {
        log::debug!("Parsing record into InputRecord: {record:?}");
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let (method, input) = match record.parse_payment() {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let processor = Dispatcher::create_payment_method(method)?;

        if !processor.validate_data(&input) {
            log::warn!("Rejected {method} payment: validation failed");
            outcomes.push(Outcome {
                report: PaymentReport {
                    method,
                    accepted: false,
                    transaction_id: None,
                    amount: input.amount(),
                    commission: 0.0,
                },
                receipt: None,
            });
            continue;
        }

        let result = processor.process_payment(&input);
        let commission = processor.calculate_commission(result.amount);

        log::debug!("Processed {method} payment: {result:?}");

        let receipt_input = input.with_text("transaction_id", result.transaction_id.as_str());
        let receipt = processor.generate_receipt(&receipt_input);

        outcomes.push(Outcome {
            report: PaymentReport {
                method,
                accepted: result.success,
                transaction_id: Some(result.transaction_id.to_string()),
                amount: result.amount,
                commission,
            },
            receipt: Some(receipt),
        });
    }

    return Ok(outcomes);
}

/// Serialize the summary rows and write the report to stdout
fn report_to_std_out(outcomes: &[Outcome]) -> Result {
    let mut wtr = writer::build_csv_writer();

    log::debug!("Serializing {} report rows...", outcomes.len());
    for outcome in outcomes {
        wtr.serialize(&outcome.report)?;
    }

    let output = writer::write_to_string(wtr)?;

    println!("{}", output);

    Ok(())
}

/// Print the receipt of every accepted payment, separated by blank lines
fn print_receipts(outcomes: &[Outcome]) {
    for outcome in outcomes {
        if let Some(receipt) = &outcome.receipt {
            println!("{receipt}\n");
        }
    }
}
