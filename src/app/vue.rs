// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Historique : plus récent en haut, échecs affichés "Error"

use eframe::egui;

use calculatrice_piles::noyau::format::{format_issue, format_valeur};

use super::etat::{AppCalc, HISTORIQUE_MAX_AFFICHE, TITRE_APP};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(TITRE_APP);
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: {2 + 3} * 4, 10 - 3 - 2, (8 / 2) + 12")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Actions + réglages
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultat seulement ; AC = tout sauf l’historique
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(
                ui,
                "AC",
                "Remise à zéro (l’historique est conservé)",
                Action::ResetTotal,
            );

            ui.separator();

            let mut restreint = self.mode_restreint();
            if ui
                .checkbox(&mut restreint, "restreint")
                .on_hover_text("Seulement <chiffre> <op> <chiffre>")
                .changed()
            {
                self.set_mode_restreint(restreint);
            }

            let mut strict = self.mode_strict();
            if ui
                .checkbox(&mut strict, "strict")
                .on_hover_text("Refuse les caractères inconnus au lieu de les ignorer")
                .changed()
            {
                self.set_mode_strict(strict);
            }
        });

        ui.add_space(8.0);

        // Opérateurs + crochets + "="
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", InsertKind::Ouvrant);
            self.bouton_insert(ui, ")", InsertKind::Fermant);
            self.bouton_insert(ui, "{", InsertKind::Ouvrant);
            self.bouton_insert(ui, "}", InsertKind::Fermant);

            ui.separator();

            self.bouton_insert(ui, "+", InsertKind::Op);
            self.bouton_insert(ui, "-", InsertKind::Op);
            self.bouton_insert(ui, "*", InsertKind::Op);
            self.bouton_insert(ui, "/", InsertKind::Op);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        // Pavé numérique
        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for chiffre in ligne {
                        self.bouton_insert(ui, chiffre, InsertKind::Chiffre);
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0", InsertKind::Chiffre);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                let etapes = self.demarche.etapes.join("\n");
                Self::champ_demarche(ui, "Opérations", "demarche_etapes", &etapes);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let total = self.calculatrice.historique().len();

        // id fixe : le titre change à chaque évaluation
        egui::CollapsingHeader::new(format!("Historique ({total})"))
            .id_salt("historique")
            .default_open(true)
            .show(ui, |ui| {
                if total == 0 {
                    ui.monospace("vide");
                    return;
                }

                let mut rappel: Option<String> = None;

                egui::Grid::new("historique_grid")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        for e in self
                            .calculatrice
                            .historique()
                            .recentes()
                            .take(HISTORIQUE_MAX_AFFICHE)
                        {
                            // clic sur l’expression => recopiée dans l’entrée
                            let expr = egui::RichText::new(&e.expression).monospace();
                            if ui
                                .add(egui::Label::new(expr).sense(egui::Sense::click()))
                                .on_hover_text("Reprendre cette expression")
                                .clicked()
                            {
                                rappel = Some(e.expression.clone());
                            }

                            let issue = format_issue(&e.issue);
                            if e.issue.is_ok() {
                                ui.monospace(issue);
                            } else {
                                ui.colored_label(ui.visuals().error_fg_color, issue);
                            }
                            ui.end_row();
                        }
                    });

                if total > HISTORIQUE_MAX_AFFICHE {
                    let reste = total - HISTORIQUE_MAX_AFFICHE;
                    ui.label(format!("… {reste} entrées plus anciennes"));
                }

                if let Some(s) = rappel {
                    self.entree = s;
                    self.focus_entree = true;
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, symbole: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(symbole));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::Fermant => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(symbole);
            }
            InsertKind::Ouvrant => {
                let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                if let Some(c) = last {
                    if c.is_ascii_digit() || c == ')' || c == '}' {
                        self.entree.push(' ');
                    }
                }
                self.entree.push_str(symbole);
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(symbole);
                self.entree.push(' ');
            }
            InsertKind::Chiffre => {
                // chiffres: pas d’espaces auto (12 reste 12)
                self.entree.push_str(symbole);
            }
        }

        self.focus_entree = true;
    }

    /// Évalue l’expression via le noyau (qui l’historise), puis dépose résultat/démarche.
    fn eval_via_noyau(&mut self) {
        match self.calculatrice.evaluer_avec_demarche(&self.entree) {
            Ok((v, demarche)) => self.set_resultat(format_valeur(v), demarche),
            Err(e) => self.set_erreur(e.to_string()),
        }
        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Chiffre,
    Op,
    Ouvrant,
    Fermant,
}
