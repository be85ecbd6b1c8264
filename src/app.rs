// src/app.rs
//
// Calculatrice de sommes de Riemann — module App (racine)
// -------------------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppRiemann (pour main.rs: use crate::app::AppRiemann;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion Enter est faite dans vue.rs (au bon endroit: quand le champ
//   fonction a le focus).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppRiemann;`
pub use etat::AppRiemann;

use eframe::egui;

impl eframe::App for AppRiemann {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = effacer seulement le champ fonction (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_fonction(); // méthode publique de etat.rs
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
