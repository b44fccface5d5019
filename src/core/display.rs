use prettytable::{
    format::consts::FORMAT_BOX_CHARS,
    {Cell, Row, Table},
};
use std::{
    any::type_name,
    fmt::{Debug, Display, Formatter, Result},
};

use crate::Array;

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Array")
            .field("dtype", &type_name::<T>())
            .field("dims", &self.ndim())
            .field("elems", &self.size())
            .field("shape", &self.shape())
            .finish()
    }
}

impl<T: Display + Debug + Copy> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let n = self.ndim();

        if n == 0 {
            if let Some(cell) = self.cells.first() {
                writeln!(f, "{}", cell.get())?;
            }

            return write!(f, "{:?}", self);
        }

        if (1..=8).contains(&n) {
            let table = if n % 2 == 1 {
                let row = odd_dimensions(self, n, 0);
                let table = Table::init(vec![row]);
                set_style(table)
            } else {
                even_dimensions(self, n, 0)
            };

            write!(f, "{}", table)?;
        }

        writeln!(f, "{:?}", self)
    }
}

fn odd_dimensions<T>(array: &Array<T>, n: usize, offset: usize) -> Row
where
    T: Copy + Display,
{
    let dim = array.ndim() - n;
    let size = array.shape()[dim];
    let block = array.shape()[dim + 1..].iter().product::<usize>();

    if n == 1 {
        Row::from(
            (0..size)
                .map(|index| {
                    let element = array.cells[offset + index].get();
                    Cell::from(&element)
                })
                .collect::<Vec<Cell>>(),
        )
    } else {
        Row::from(
            (0..size)
                .map(|index| even_dimensions(array, n - 1, offset + index * block))
                .collect::<Vec<Table>>(),
        )
    }
}

fn even_dimensions<T>(array: &Array<T>, n: usize, offset: usize) -> Table
where
    T: Copy + Display,
{
    let dim = array.ndim() - n;
    let size = array.shape()[dim];
    let block = array.shape()[dim + 1..].iter().product::<usize>();

    let rows = (0..size)
        .map(|index| odd_dimensions(array, n - 1, offset + index * block))
        .collect();

    let table = Table::init(rows);
    set_style(table)
}

fn set_style(mut table: Table) -> Table {
    table.set_format(*FORMAT_BOX_CHARS);
    table
}
