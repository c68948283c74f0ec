pub mod administrador;
pub mod categoria;
pub mod emprestimo;
pub mod exemplar;
pub mod obra;
pub mod reserva;
pub mod usuario;

pub use administrador::{Administrador, AdministradorCreate};
pub use categoria::{Categoria, CategoriaCreate};
pub use emprestimo::{Emprestimo, EmprestimoCreate, EmprestimoUpdate};
pub use exemplar::{Exemplar, ExemplarCreate, ExemplarUpdate};
pub use obra::{Obra, ObraCreate, ObraUpdate};
pub use reserva::{Reserva, ReservaCreate, ReservaUpdate};
pub use usuario::{Usuario, UsuarioCreate, UsuarioLogin, UsuarioUpdate};
