use anyhow::Result;
use cellarray::Array;

fn main() -> Result<()> {
    let column = Array::<i32>::ones(&[3, 1]);
    println!("column");
    println!("{}", column);

    let row = Array::full(&[1, 4], 2);
    println!("row");
    println!("{}", row);

    let sum = (&column + &row)?;
    println!("column + row");
    println!("{}", sum);

    let scaled = (&sum * 10)?;
    println!("(column + row) * 10");
    println!("{}", scaled);

    let negated = (-&scaled)?;
    println!("-((column + row) * 10)");
    println!("{}", negated);

    let real = negated.astype::<f64>();
    println!("astype::<f64>");
    println!("{}", real);

    Ok(())
}
