use bluebook_inductance::prelude::*;

fn main() {
    // Two concentric windings on one core leg, ampere-turn balanced.
    let core = CoreWindow::new(0.6, 0.05); // 0.6 m window, 50 mm core radius
    let lv = CoilSection::new(0.10, 0.15, 0.05, 0.55, 100.0, 1.0e6, core);
    let hv = CoilSection::new(0.20, 0.25, 0.05, 0.55, 400.0, -1.0e6, core);

    let engine = Inductance::blue_book();
    let matrix = engine.matrix(&[lv, hv]);

    println!("section, L_self(H), I_terminal(A)");
    for (i, s) in [lv, hv].iter().enumerate() {
        println!("{i}, {:.6e}, {:.6e}", matrix[(i, i)], s.terminal_current());
    }
    println!("M(H), {:.6e}", matrix[(0, 1)]);

    let k = matrix[(0, 1)] / (matrix[(0, 0)] * matrix[(1, 1)]).sqrt();
    println!("coupling coefficient, {k:.6}");
    println!("leakage referred to LV(H), {:.6e}", engine.leakage(&lv, &hv));
}
