/*!
```console
          _ _
  ___ ___| | | __ _ _ __ _ __ __ _ _   _
 / __/ _ \ | |/ _` | '__| '__/ _` | | | |
| (_|  __/ | | (_| | |  | | | (_| | |_| |
 \___\___|_|_|\__,_|_|  |_|  \__,_|\__, |
                                   |___/
```

N-dimensional arrays with NumPy-style broadcasting and write-through views.
*/

mod core;

pub use core::errors;
pub use core::Array;
pub use core::Sel;
