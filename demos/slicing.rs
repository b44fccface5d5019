use anyhow::Result;
use cellarray::{Array, Sel};

fn main() -> Result<()> {
    // a = np.arange(20).reshape(4, 1, 5)
    let a = Array::arange(20, 0).reshape(&[4, 1, 5])?;
    println!("a");
    println!("{}", a);

    // b = a[1:4, 0, 2:5]
    let b = a.slice(&[Sel::Rng(1, 4), Sel::Idx(0), Sel::Rng(2, 5)])?;
    println!("b = a[1:4, 0, 2:5]");
    println!("{}", b);

    // a[1:4, 0:1, 2:5] = 3 + np.full((3, 1, 1), 1) + -np.full((1, 3), 2)
    let rhs = ((Array::full(&[3, 1, 1], 1) + 3)? + (-Array::full(&[1, 3], 2))?)?;
    a.slice(&[Sel::Rng(1, 4), Sel::Rng(0, 1), Sel::Rng(2, 5)])?
        .assign(&rhs)?;
    println!("after a[1:4, 0:1, 2:5] = 3 + full((3, 1, 1), 1) + -full((1, 3), 2)");
    println!("{}", a);

    // The write went through the shared cells, so b sees it too.
    println!("b");
    println!("{}", b);

    // a[-1][-1][-1] = 5566
    a.index(-1)?.index(-1)?.index(-1)?.assign_value(5566)?;
    println!("after a[-1][-1][-1] = 5566");
    println!("{}", a);
    println!("b");
    println!("{}", b);

    Ok(())
}
