use penawaran::parser::*;

fn main() {
    let paste = "\
Tanggal\tNo\tCustomer\tBrand\tType\tSN\tPart\tDescription\tQty\tCur\tHarga\tHarga IDR
12/03/2024\tSO-118\tRS Harapan\tMindray\tT5\tSN-7781\t115-020938-00\tECG cable 5 lead\t2 pcs\tUSD\t12.5\t200.000
12/03/2024\tSO-118\tRS Harapan\tMindray\tT5\tSN-7781\t040-000754-00\tNIBP hose\t1 pcs\tUSD\t8\t135.000
";

    let report = parse_report(paste);
    for item in &report.items {
        println!(
            "{} {} {} - {} @ {}",
            item.quantity,
            item.unit_of_measure,
            item.part_number.as_deref().unwrap_or(""),
            item.description.as_deref().unwrap_or(""),
            item.unit_price
        );
    }
    for skipped in &report.skipped {
        println!("skipped {skipped}");
    }

    let chat = "Pak, ini listnya\n2 pcs SP-100 SpO2 sensor adult 1.250.000\n1 set CF-7 Cuff set 650.000";
    let items = parse_items(chat);
    println!("{} items from chat", items.len());
}
