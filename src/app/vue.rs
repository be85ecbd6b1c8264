// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppRiemann (etat.rs) pour natif + wasm
// - Clavier : Enter recalcule (quand le champ fonction est focus)
// - Tracé intégré (peintre egui) : courbe + rectangles + encadré S_n / Δx
//
// Convention de couleurs historique :
// - aire signée positive (Δx·f > 0) : vert
// - aire signée négative : rouge

use eframe::egui;

use super::etat::{AppRiemann, Demarche, Trace, N_MAX};
use crate::noyau::compiler_fonction;
use crate::noyau::courbe::{echantillonner_courbe, POINTS_COURBE};
use crate::noyau::format::annotation;
use crate::noyau::riemann::{somme_riemann, Mode};

/// Couleurs d’origine : #99FF99 / #F88379.
const VERT_POSITIF: egui::Color32 = egui::Color32::from_rgb(0x99, 0xFF, 0x99);
const ROUGE_NEGATIF: egui::Color32 = egui::Color32::from_rgb(0xF8, 0x83, 0x79);

/// Bleu de la courbe.
const BLEU_COURBE: egui::Color32 = egui::Color32::from_rgb(0x1F, 0x77, 0xB4);

impl AppRiemann {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice de sommes de Riemann");
        ui.add_space(6.0);

        self.ui_entrees(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(4.0);

        self.ui_demarche(ui);

        ui.add_space(4.0);

        self.ui_trace(ui);
    }

    /* ------------------------ Entrées ------------------------ */

    fn ui_entrees(&mut self, ui: &mut egui::Ui) {
        // f(x) + dx
        ui.horizontal(|ui| {
            ui.label("f(x) =");

            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.entree_fonction)
                    .desired_width((ui.available_width() - 40.0).max(120.0))
                    .hint_text("Ex: 3 * (x^2) + 1.5 * (x^3)")
                    .code_editor(),
            );

            ui.label("dx");

            // Si on vient d’agir (bouton/erreur), on redonne le focus au champ.
            if self.focus_fonction {
                resp.request_focus();
                self.focus_fonction = false;
            }

            // Enter recalcule (seulement si le champ est focus, pas de
            // déclenchement “global” quand l’utilisateur clique ailleurs).
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if resp.has_focus() && enter {
                self.recalcule();
            }
        });

        // Bornes + nombre de rectangles + mode
        ui.horizontal(|ui| {
            ui.label("a =");
            ui.add(egui::TextEdit::singleline(&mut self.entree_a).desired_width(56.0));

            ui.label("b =");
            ui.add(egui::TextEdit::singleline(&mut self.entree_b).desired_width(56.0));

            ui.separator();

            ui.label("Rectangles :");
            ui.add(egui::TextEdit::singleline(&mut self.entree_n).desired_width(56.0));

            ui.separator();

            ui.label("Mode :");
            egui::ComboBox::from_id_salt("mode_riemann")
                .selected_text(self.mode.libelle_fr())
                .show_ui(ui, |ui| {
                    for m in Mode::TOUS {
                        ui.selectable_value(&mut self.mode, m, m.libelle_fr());
                    }
                });
        });

        // Actions
        ui.horizontal(|ui| {
            let maj = ui
                .add_sized([110.0, 30.0], egui::Button::new("Mettre à jour"))
                .on_hover_text("Recalcule la somme et le tracé (ou Enter)");
            if maj.clicked() {
                self.recalcule();
            }

            let c = ui
                .add_sized([56.0, 30.0], egui::Button::new("C"))
                .on_hover_text("Efface seulement le champ f(x)");
            if c.clicked() {
                self.clear_fonction();
            }

            let ac = ui
                .add_sized([56.0, 30.0], egui::Button::new("AC"))
                .on_hover_text("Remise aux valeurs de la démo");
            if ac.clicked() {
                self.reset_total();
            }

            if !self.erreur.is_empty() {
                ui.separator();
                ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
            }
        });
    }

    /* ------------------------ Calcul ------------------------ */

    /// Lit les champs texte (frontière : c’est l’appelant qui parse les
    /// entrées), compile la formule, lance le moteur puis dépose un tracé
    /// FRAIS. En cas d’erreur, le tracé précédent reste affiché.
    fn recalcule(&mut self) {
        let n: usize = match self.entree_n.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                self.set_erreur(format!("nombre de rectangles invalide: '{}'", self.entree_n));
                return;
            }
        };
        if n == 0 || n > N_MAX {
            self.set_erreur(format!("le nombre de rectangles doit être entre 1 et {N_MAX}"));
            return;
        }

        let a: f64 = match self.entree_a.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                self.set_erreur(format!("borne a invalide: '{}'", self.entree_a));
                return;
            }
        };
        let b: f64 = match self.entree_b.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                self.set_erreur(format!("borne b invalide: '{}'", self.entree_b));
                return;
            }
        };

        let fonction = match compiler_fonction(&self.entree_fonction) {
            Ok(f) => f,
            Err(e) => {
                self.set_erreur(e);
                return;
            }
        };

        let resultat = match somme_riemann(n, &fonction, a, b, self.mode) {
            Ok(r) => r,
            Err(e) => {
                self.set_erreur(e.to_string());
                return;
            }
        };

        let courbe = echantillonner_courbe(&fonction, a, b);

        let d = fonction.demarche();
        let demarche = Demarche {
            jetons: d.jetons.clone(),
            rpn: d.rpn.clone(),
            ast: d.ast.clone(),
            note: d.note.clone(),
        };

        self.set_trace(
            Trace {
                fonction_texte: fonction.texte().to_string(),
                n,
                a,
                b,
                resultat,
                courbe,
            },
            demarche,
        );
    }

    /* ------------------------ Tracé ------------------------ */

    fn ui_trace(&self, ui: &mut egui::Ui) {
        let Some(trace) = &self.trace else {
            ui.monospace("aucun tracé — appuyer sur « Mettre à jour »");
            return;
        };

        ui.monospace(format!(
            "f(x) = {}   sur [{}, {}]",
            trace.fonction_texte, trace.a, trace.b
        ));

        let hauteur = ui.available_height().max(240.0);
        let (rep, peintre) =
            ui.allocate_painter(egui::vec2(ui.available_width(), hauteur), egui::Sense::hover());
        let cadre = rep.rect;
        let peintre = peintre.with_clip_rect(cadre);

        peintre.rect_filled(cadre, 4.0, ui.visuals().extreme_bg_color);

        // Bornes de données : x sur [min(a,b), max(a,b)] (comme le tracé
        // historique), y sur tout ce qui est dessiné (courbe, hauteurs, axe 0).
        let (mut x_min, mut x_max) = if trace.a <= trace.b {
            (trace.a, trace.b)
        } else {
            (trace.b, trace.a)
        };
        if x_min == x_max {
            x_min -= 0.5;
            x_max += 0.5;
        }

        let mut y_min = 0.0_f64;
        let mut y_max = 0.0_f64;
        for p in &trace.courbe {
            y_min = y_min.min(p[1]);
            y_max = y_max.max(p[1]);
        }
        for r in &trace.resultat.rectangles {
            y_min = y_min.min(r.hauteur);
            y_max = y_max.max(r.hauteur);
        }
        if y_min == y_max {
            y_min -= 1.0;
            y_max += 1.0;
        }
        let marge = (y_max - y_min) * 0.05;
        y_min -= marge;
        y_max += marge;

        let vers_ecran = |x: f64, y: f64| -> egui::Pos2 {
            let fx = ((x - x_min) / (x_max - x_min)) as f32;
            let fy = ((y - y_min) / (y_max - y_min)) as f32;
            egui::pos2(
                cadre.left() + fx * cadre.width(),
                cadre.bottom() - fy * cadre.height(),
            )
        };

        // Rectangles d’abord (sous la courbe)
        for r in &trace.resultat.rectangles {
            let couleur = if r.aire() > 0.0 {
                VERT_POSITIF
            } else {
                ROUGE_NEGATIF
            };

            let p1 = vers_ecran(r.origine_x, r.origine_y);
            let p2 = vers_ecran(r.origine_x + r.largeur, r.origine_y + r.hauteur);
            let rect = egui::Rect::from_two_pos(p1, p2);

            peintre.rect_filled(rect, 0.0, couleur.gamma_multiply(0.55));
            peintre.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(1.0, couleur),
                egui::StrokeKind::Inside,
            );
        }

        // Axes (si visibles)
        let axe = egui::Stroke::new(1.0, ui.visuals().weak_text_color());
        if y_min <= 0.0 && 0.0 <= y_max {
            peintre.line_segment([vers_ecran(x_min, 0.0), vers_ecran(x_max, 0.0)], axe);
        }
        if x_min <= 0.0 && 0.0 <= x_max {
            peintre.line_segment([vers_ecran(0.0, y_min), vers_ecran(0.0, y_max)], axe);
        }

        // Courbe : polylignes coupées aux trous d’échantillonnage (pôles)
        let pas = (x_max - x_min) / (POINTS_COURBE - 1) as f64;
        let crayon = egui::Stroke::new(1.5, BLEU_COURBE);

        let mut segment: Vec<egui::Pos2> = Vec::new();
        let mut dernier_x = f64::NEG_INFINITY;
        for p in &trace.courbe {
            if !segment.is_empty() && p[0] - dernier_x > pas * 1.5 {
                if segment.len() > 1 {
                    peintre.add(egui::Shape::line(std::mem::take(&mut segment), crayon));
                } else {
                    segment.clear();
                }
            }
            segment.push(vers_ecran(p[0], p[1]));
            dernier_x = p[0];
        }
        if segment.len() > 1 {
            peintre.add(egui::Shape::line(segment, crayon));
        }

        // Encadré S_n / Δx, coin haut-gauche (3 décimales)
        let texte = annotation(trace.n, trace.resultat.somme, trace.resultat.delta_x);
        let fonte = egui::TextStyle::Monospace.resolve(ui.style());
        let encre = ui.visuals().strong_text_color();

        let galley = peintre.layout_no_wrap(texte, fonte, encre);
        let pos = cadre.left_top() + egui::vec2(12.0, 12.0);
        let fond = egui::Rect::from_min_size(pos, galley.size()).expand(6.0);

        peintre.rect_filled(fond, 4.0, ui.visuals().code_bg_color);
        peintre.galley(pos, galley, encre);
    }

    /* ------------------------ Démarche ------------------------ */

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(ui, "AST", "demarche_ast", &self.demarche.ast);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));

        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
