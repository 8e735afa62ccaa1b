//! Call table for the Reacto ERP endpoint.
//!
//! One row per remote operation: canonical name plus the ordered parameter
//! list sent as the named JSON body.

use super::ParamKind::{Binary, DateTime, Double, Integer, Passthrough, Str};
use super::{CallSpec, ParamSpec};

const fn p(name: &'static str, kind: super::ParamKind) -> ParamSpec {
    ParamSpec::new(name, kind)
}

pub(crate) static CALLS: &[CallSpec] = &[
    CallSpec::positional("init"),
    CallSpec::named(
        "ID_DOExecute",
        &[
            p("DOXML", Str),
            p("MethodName", Str),
            p("ClassName", Str),
            p("Params", Passthrough),
            p("RetDoc", Integer),
        ],
    ),
    CallSpec::named("GetCompoLavaggi", &[p("Idprod", Integer), p("lingua", Str)]),
    CallSpec::named(
        "GetProdotti",
        &[
            p("idStore", Integer),
            p("lingua", Str),
            p("idUtente", Integer),
            p("idSoggetto", Integer),
        ],
    ),
    CallSpec::named(
        "GetProdottiByListinoPers",
        &[
            p("idStore", Integer),
            p("lingua", Str),
            p("idSoggetto", Integer),
        ],
    ),
    CallSpec::named(
        "AbilitaDisabilitaProdByListinoPers",
        &[
            p("idStore", Integer),
            p("idSoggetto", Integer),
            p("prodotti", Str),
            p("abilita", Integer),
        ],
    ),
    CallSpec::named(
        "GetQtaStock",
        &[
            p("idStore", Integer),
            p("idFasciaStock", Integer),
            p("qtaStock", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetVariantiProdByLivello",
        &[
            p("idStore", Integer),
            p("ID", Integer),
            p("var1", Integer),
            p("var2", Integer),
            p("var3", Integer),
            p("livello", Integer),
            p("Lingua", Str),
            p("Utente", Integer),
        ],
    ),
    CallSpec::named(
        "GetVariantiProdMatrice",
        &[
            p("idStore", Integer),
            p("ID", Integer),
            p("var1", Integer),
            p("var2", Integer),
            p("var3", Integer),
            p("livelloFoto", Integer),
            p("Lingua", Str),
            p("Utente", Integer),
            p("prezzi", Integer),
        ],
    ),
    CallSpec::named("GetVarianti", &[p("lingua", Str)]),
    CallSpec::named(
        "GetVariantiProdByLivelloCompleta",
        &[
            p("idStore", Integer),
            p("ID", Integer),
            p("var1", Integer),
            p("var2", Integer),
            p("var3", Integer),
            p("livello", Integer),
            p("Lingua", Str),
            p("Utente", Integer),
        ],
    ),
    CallSpec::named("GetGruppiVarianti", &[p("ID", Integer), p("lingua", Str)]),
    CallSpec::named("GetGruppiVariantiBySlug", &[p("slug", Str), p("lingua", Str)]),
    CallSpec::named(
        "GetPrezzo",
        &[
            p("idStore", Integer),
            p("idUtente", Integer),
            p("idListino", Integer),
            p("idProd", Integer),
            p("idValVar1", Integer),
            p("idValVar2", Integer),
            p("idValVar3", Integer),
            p("idCustom1", Integer),
            p("custom1", Str),
            p("idCustom2", Integer),
            p("custom2", Str),
            p("idCustom3", Integer),
            p("custom3", Str),
            p("idCustom4", Integer),
            p("custom4", Str),
            p("idCustom5", Integer),
            p("custom5", Str),
            p("quantita", Double),
        ],
    ),
    CallSpec::positional("dammidata"),
    CallSpec::named(
        "GetTabellaPrezzi",
        &[
            p("IDprod", Integer),
            p("IDutente", Integer),
            p("full", Integer),
        ],
    ),
    CallSpec::named("GetWishlist", &[p("ID", Integer)]),
    CallSpec::named("GetWishlistByUtente", &[p("IDutente", Integer)]),
    CallSpec::named("GetWishlistByHash", &[p("hash", Str)]),
    CallSpec::named("SetWishlist", &[p("IDHash", Integer), p("IDutente", Integer)]),
    CallSpec::named("UpdateWishlist", &[p("hash", Str), p("IDutente", Integer)]),
    CallSpec::named(
        "AddProdWishlist",
        &[
            p("IDhash", Integer),
            p("IDutente", Integer),
            p("IDprod", Integer),
            p("qta", Integer),
        ],
    ),
    CallSpec::named(
        "GetProdByWishlist",
        &[
            p("idStore", Integer),
            p("idHash", Integer),
            p("IDutente", Integer),
        ],
    ),
    CallSpec::named(
        "DelProdWishlist",
        &[
            p("IDhash", Integer),
            p("IDutente", Integer),
            p("IDprod", Integer),
        ],
    ),
    CallSpec::named(
        "GetLastWishlist",
        &[
            p("idStore", Integer),
            p("idHash", Integer),
            p("idWishlist", Integer),
            p("IDutente", Integer),
            p("dataMin", DateTime),
        ],
    ),
    CallSpec::named(
        "GetBarcodeProd",
        &[
            p("idprod", Integer),
            p("idval1", Integer),
            p("idval2", Integer),
            p("idval3", Integer),
            p("barcode", Str),
        ],
    ),
    CallSpec::named("GetQtaMinBarcodeByProd", &[p("idprod", Integer)]),
    CallSpec::named(
        "GetFamiglieByStore",
        &[
            p("idStore", Integer),
            p("idGruppo", Integer),
            p("slug", Str),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetSottoFamiglieByStore",
        &[
            p("idStore", Integer),
            p("idFamiglia", Integer),
            p("idGruppo", Integer),
            p("slug", Str),
            p("lingua", Str),
        ],
    ),
    CallSpec::named("GetGruppiByStore", &[p("idStore", Integer), p("slug", Str), p("lingua", Str)]),
    CallSpec::named(
        "Getfiltribyparam",
        &[
            p("Parametri", Str),
            p("lingua", Str),
            p("utente", Integer),
            p("magazzino", Integer),
        ],
    ),
    CallSpec::named(
        "Getprodbyparam",
        &[
            p("Parametri", Str),
            p("lingua", Str),
            p("Utente", Integer),
            p("magazzino", Integer),
        ],
    ),
    CallSpec::named(
        "GetprodbyparamProdfiltro",
        &[
            p("Parametri", Str),
            p("lingua", Str),
            p("Utente", Integer),
            p("magazzino", Integer),
        ],
    ),
    CallSpec::named(
        "GetprodbyparamNew",
        &[
            p("Parametri", Str),
            p("lingua", Str),
            p("Utente", Integer),
            p("magazzino", Integer),
        ],
    ),
    CallSpec::named(
        "InsertTestata",
        &[
            p("idStore", Integer),
            p("idUtente", Integer),
            p("idDestinazione", Integer),
            p("idCoupon", Integer),
            p("idVettore", Integer),
            p("idAspettoBeni", Integer),
            p("rif1", Str),
            p("rif2", Str),
            p("rif3", Str),
            p("idListino", Integer),
            p("idValuta", Integer),
            p("idSoggettoAgente", Integer),
        ],
    ),
    CallSpec::named("GetTestata", &[p("idStore", Integer), p("idTestataDocumento", Integer)]),
    CallSpec::named("GetTestataByHash", &[p("idStore", Integer), p("hash", Str)]),
    CallSpec::named(
        "GetTestataByNumero",
        &[
            p("idStore", Integer),
            p("numero", Integer),
            p("anno", Integer),
        ],
    ),
    CallSpec::named("GetTestataByToken", &[p("idStore", Integer), p("token", Str)]),
    CallSpec::named("GetTestataByTokenPos", &[p("idStore", Integer), p("token", Str)]),
    CallSpec::named("GetTestataByUtente", &[p("idStore", Integer), p("idUtente", Integer)]),
    CallSpec::named(
        "UpdateTestata",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("idUtente", Integer),
            p("idDestinazione", Integer),
            p("idCoupon", Integer),
            p("idVettore", Integer),
            p("idAspettoBeni", Integer),
            p("rif1", Str),
            p("rif2", Str),
            p("rif3", Str),
            p("idPagamento", Integer),
            p("idSpesaSped", Integer),
            p("spesaSped", Double),
            p("idSoggettoStoreNegozio", Integer),
            p("clickCollect", Integer),
            p("idListino", Integer),
            p("idValuta", Integer),
            p("idSoggettoAgente", Integer),
        ],
    ),
    CallSpec::named(
        "UpdateTestataExt",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("idUtente", Integer),
            p("idDestinazione", Integer),
            p("idCoupon", Integer),
            p("idVettore", Integer),
            p("idAspettoBeni", Integer),
            p("rif1", Str),
            p("rif2", Str),
            p("rif3", Str),
            p("idPagamento", Integer),
            p("idSpesaSped", Integer),
            p("spesaSped", Double),
            p("idSoggettoStoreNegozio", Integer),
            p("clickCollect", Integer),
            p("idCausaleIva", Integer),
            p("idListino", Integer),
            p("idValuta", Integer),
            p("idSoggettoAgente", Integer),
        ],
    ),
    CallSpec::named(
        "UpdateTestataRif",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("rif1", Str),
            p("rif2", Str),
            p("rif3", Str),
            p("note", Str),
            p("custom1", Str),
            p("custom2", Str),
            p("custom3", Str),
            p("custom4", Str),
            p("custom5", Str),
            p("custom6", Str),
            p("numdocEsterno", Str),
            p("datadocEsterna", Str),
        ],
    ),
    CallSpec::named(
        "EvadiCarrello",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("idUtente", Integer),
            p("idCausaleTrasporto", Integer),
            p("rif1", Str),
            p("rif2", Str),
            p("rif3", Str),
        ],
    ),
    CallSpec::named(
        "SetDefaultSpesaSpedizione",
        &[
            p("idStore", Integer),
            p("provincia", Str),
            p("nazione", Str),
            p("peso", Double),
            p("volume", Double),
            p("totale", Double),
            p("clientePrime", Integer),
            p("clickCollect", Integer),
            p("lingua", Str),
            p("Porto", Integer),
        ],
    ),
    CallSpec::named(
        "GetSpesaSpedizione",
        &[
            p("idStore", Integer),
            p("idSpesaSpedizione", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "CalcolaSpeseDiSpedizione",
        &[
            p("idStore", Integer),
            p("provincia", Str),
            p("nazione", Str),
            p("peso", Double),
            p("volume", Double),
            p("totale", Double),
            p("prime", Integer),
            p("clickCollect", Integer),
            p("lingua", Str),
            p("idListino", Integer),
            p("idUtente", Integer),
            p("mezzoDestinatario", Integer),
            p("cap", Str),
        ],
    ),
    CallSpec::named(
        "UpdateSpesaSpedizione",
        &[
            p("idStore", Integer),
            p("idSpesaSpedizione", Integer),
            p("descrizione", Str),
            p("valore", Double),
            p("prezzoDa", Double),
            p("prezzoA", Double),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "SetTestataPagato",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("controvaloreEuro", Double),
        ],
    ),
    CallSpec::named(
        "UpdateTestataToken",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("tipoToken", Str),
            p("token", Str),
        ],
    ),
    CallSpec::named(
        "SetTestataHash",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("hash", Str),
            p("dataCreazione", DateTime),
            p("dataScadenza", DateTime),
            p("tipoToken", Str),
            p("token", Str),
        ],
    ),
    CallSpec::named("GetLastHashByUtente", &[p("idStore", Integer), p("idUtente", Integer)]),
    CallSpec::named(
        "GetCarrelliByUtente",
        &[
            p("idStore", Integer),
            p("idUtente", Integer),
            p("dataInizio", DateTime),
            p("dataFine", DateTime),
            p("importoMinimo", Double),
            p("incEvasi", Integer),
            p("dataInizioHash", DateTime),
            p("dataFineHash", DateTime),
            p("ricercaperhash", Integer),
        ],
    ),
    CallSpec::named(
        "GetTestateByUtente",
        &[
            p("idStore", Integer),
            p("idUtente", Integer),
            p("daData", DateTime),
            p("aData", DateTime),
        ],
    ),
    CallSpec::named(
        "GetTestateBySoggettoAgente",
        &[
            p("idStore", Integer),
            p("idSoggettoAgente", Integer),
            p("daData", DateTime),
            p("aData", DateTime),
        ],
    ),
    CallSpec::named(
        "ChangeTestataToDealer",
        &[
            p("idStore", Integer),
            p("idTestataDocumenti", Integer),
            p("idUtente", Integer),
        ],
    ),
    CallSpec::named(
        "ChangeTestataToPrivato",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("idUtente", Integer),
        ],
    ),
    CallSpec::named(
        "GetPagamentiByUtente",
        &[
            p("idStore", Integer),
            p("idPagamento", Integer),
            p("idUtente", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetPagamenti",
        &[
            p("idStore", Integer),
            p("idPagamento", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "CheckCoupon",
        &[
            p("idStore", Integer),
            p("codice", Str),
            p("spesa", Double),
            p("idUtente", Integer),
            p("IdDoc", Integer),
            p("Lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetCoupon",
        &[
            p("idStore", Integer),
            p("idCoupon", Integer),
            p("Lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetCouponByUtente",
        &[
            p("idStore", Integer),
            p("idUtente", Integer),
            p("Lingua", Str),
        ],
    ),
    CallSpec::named(
        "InsertCoupon",
        &[
            p("idStore", Integer),
            p("codice", Str),
            p("sconto", Double),
            p("scontoPercentuale", Double),
            p("spedizioneGratuita", Integer),
            p("usoSingolo", Integer),
            p("usoSingoloCliente", Integer),
            p("spesaMinima", Double),
            p("dataInizio", DateTime),
            p("dataFine", DateTime),
            p("idUtente", Integer),
            p("idTestataDocumento", Integer),
            p("tipologia", Str),
            p("Idcouponext", Str),
            p("idtemplate", Integer),
            p("automatico", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetParametriCoupon",
        &[
            p("idStore", Integer),
            p("idCoupon", Integer),
            p("codiceCoupon", Str),
        ],
    ),
    CallSpec::named(
        "SetCouponUtente",
        &[
            p("idStore", Integer),
            p("idCoupon", Integer),
            p("idSoggetto", Integer),
            p("Lingua", Str),
        ],
    ),
    CallSpec::named(
        "InsertTestataListino",
        &[
            p("idStore", Integer),
            p("idUtente", Integer),
            p("idDestinazione", Integer),
            p("idCoupon", Integer),
            p("idVettore", Integer),
            p("idAspettoBeni", Integer),
            p("rif1", Str),
            p("rif2", Str),
            p("rif3", Str),
            p("idListino", Integer),
            p("idValuta", Integer),
            p("idAgente", Integer),
        ],
    ),
    CallSpec::named(
        "UpdateTestataListino",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("idUtente", Integer),
            p("idDestinazione", Integer),
            p("idCoupon", Integer),
            p("idVettore", Integer),
            p("idAspettoBeni", Integer),
            p("rif1", Str),
            p("rif2", Str),
            p("rif3", Str),
            p("idPagamento", Integer),
            p("idSpesaSped", Integer),
            p("spesaSped", Double),
            p("idSoggettoStoreNegozio", Integer),
            p("clickCollect", Integer),
            p("idListino", Integer),
            p("idValuta", Integer),
        ],
    ),
    CallSpec::named(
        "RipetiTestata",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("checkGiacenza", Str),
        ],
    ),
    CallSpec::named(
        "GetTestateByUtenteTipo",
        &[
            p("idStore", Integer),
            p("idUtente", Integer),
            p("tipoRecord", Str),
            p("daData", DateTime),
            p("aData", DateTime),
        ],
    ),
    CallSpec::named(
        "EvadiCarrelloExt",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("idUtente", Integer),
            p("idCausaleTrasporto", Integer),
            p("rif1", Str),
            p("rif2", Str),
            p("rif3", Str),
            p("idCausaleMaga", Integer),
            p("tipoRec", Str),
            p("movimenta", Integer),
        ],
    ),
    CallSpec::named(
        "UpdateTestataTipoStampa",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("tipoStampa", Str),
        ],
    ),
    CallSpec::named(
        "UpdateTestataStato",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("confermato", Integer),
            p("annullato", Integer),
            p("sospeso", Integer),
            p("dataConferma", DateTime),
        ],
    ),
    CallSpec::named(
        "GetDocumento",
        &[
            p("idStore", Integer),
            p("TipoRec", Str),
            p("CausaleMaga", Integer),
            p("CausaleTras", Integer),
            p("DataDa", DateTime),
            p("DataA", DateTime),
            p("NumeroDoc", Integer),
            p("IdUtente", Integer),
            p("IdProd", Integer),
        ],
    ),
    CallSpec::named("GetCarrelloByOrdine", &[p("idStore", Integer), p("idOrdine", Integer)]),
    CallSpec::named("GetRighe", &[p("idStore", Integer), p("idTestataDocumento", Integer)]),
    CallSpec::named(
        "GetRiga",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("rigaDocumento", Integer),
        ],
    ),
    CallSpec::named(
        "InsertRiga",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("idProd", Integer),
            p("idCausaleMagazzino", Integer),
            p("idCausaleIva", Integer),
            p("prezzo", Double),
            p("idValVar1", Integer),
            p("idValVar2", Integer),
            p("idValVar3", Integer),
            p("idCustom1", Integer),
            p("custom1", Str),
            p("idCustom2", Integer),
            p("custom2", Str),
            p("idCustom3", Integer),
            p("custom3", Str),
            p("idCustom4", Integer),
            p("custom4", Str),
            p("idCustom5", Integer),
            p("custom5", Str),
            p("quantita", Double),
            p("note", Str),
        ],
    ),
    CallSpec::named(
        "UpdateRiga",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("rigaDocumento", Integer),
            p("idProd", Integer),
            p("idCausaleMagazzino", Integer),
            p("idCausaleIva", Integer),
            p("prezzo", Double),
            p("idValVar1", Integer),
            p("idValVar2", Integer),
            p("idValVar3", Integer),
            p("idCustom1", Integer),
            p("custom1", Str),
            p("idCustom2", Integer),
            p("custom2", Str),
            p("idCustom3", Integer),
            p("custom3", Str),
            p("idCustom4", Integer),
            p("custom4", Str),
            p("idCustom5", Integer),
            p("custom5", Str),
            p("quantita", Double),
            p("note", Str),
        ],
    ),
    CallSpec::named(
        "CheckRighe",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("checkGiacenza", Str),
        ],
    ),
    CallSpec::named(
        "DeleteRiga",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("rigaDocumento", Integer),
            p("mantieniTestata", Integer),
        ],
    ),
    CallSpec::named(
        "DeleteRigaOld",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("rigaDocumento", Integer),
        ],
    ),
    CallSpec::named("CastellettoIva", &[p("idStore", Integer), p("idTestataDocumento", Integer)]),
    CallSpec::named(
        "OttieniStampa",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("numeroDocumento", Integer),
            p("dataDocumento", DateTime),
            p("codiceStampa", Str),
        ],
    ),
    CallSpec::named("GetFatturaByOrdine", &[p("idTestataDocumento", Integer)]),
    CallSpec::named("GetConfig", &[p("lingua", Str)]),
    CallSpec::named(
        "SetHash",
        &[
            p("Hash", Str),
            p("datacreazione", DateTime),
            p("datascadenza", DateTime),
        ],
    ),
    CallSpec::named(
        "SetHashTestata",
        &[
            p("idTestata", Integer),
            p("Hash", Str),
            p("datacreazione", DateTime),
            p("datascadenza", DateTime),
        ],
    ),
    CallSpec::named(
        "UpdateHash",
        &[
            p("Hash", Str),
            p("datacreazione", DateTime),
            p("datascadenza", DateTime),
        ],
    ),
    CallSpec::named("CheckServices", &[p("checkDb", Integer)]),
    CallSpec::positional("GetCausaliIva"),
    CallSpec::named("GetStore", &[p("idStore", Integer)]),
    CallSpec::named(
        "GetFotoPrimopiano",
        &[
            p("idStore", Integer),
            p("IDfotoprimopiano", Integer),
            p("lingua", Str),
            p("Idcatalbero", Integer),
        ],
    ),
    CallSpec::named(
        "GetBanner",
        &[
            p("idStore", Integer),
            p("IDbanner", Integer),
            p("idBannerCat", Integer),
            p("idSesso", Integer),
            p("idEta", Integer),
            p("idCat", Integer),
            p("idLookbook", Integer),
            p("lingua", Str),
            p("idcatAlbero", Integer),
        ],
    ),
    CallSpec::named("GetCategoriaBanner", &[p("IDcat", Integer), p("lingua", Str)]),
    CallSpec::named(
        "GetLookbook",
        &[
            p("idStore", Integer),
            p("IDlookbook", Integer),
            p("idlbCat", Integer),
            p("idSesso", Integer),
            p("idStagione", Integer),
            p("idMarchio", Integer),
            p("idcat", Integer),
            p("lingua", Str),
            p("idTema", Integer),
        ],
    ),
    CallSpec::named(
        "GetCategoriaLookbook",
        &[
            p("idStore", Integer),
            p("idStagione", Integer),
            p("IDcat", Integer),
            p("slug", Str),
            p("lingua", Str),
        ],
    ),
    CallSpec::named("GetProdByLookbook", &[p("idStore", Integer), p("IDlookbook", Integer)]),
    CallSpec::named(
        "GetBlog",
        &[
            p("idStore", Integer),
            p("ID", Integer),
            p("slug", Str),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetCategoriaBlog",
        &[
            p("idStore", Integer),
            p("idBlog", Integer),
            p("id", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetCategoriaBlogBySlug",
        &[
            p("idStore", Integer),
            p("idBlog", Integer),
            p("Slug", Str),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetSottocategoriaBlog",
        &[
            p("idStore", Integer),
            p("idCat", Integer),
            p("id", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetSottocategoriaBlogBySlug",
        &[
            p("idStore", Integer),
            p("idCat", Integer),
            p("Slug", Str),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetTagBlog",
        &[
            p("idStore", Integer),
            p("idBlog", Integer),
            p("id", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetTagBlogBySlug",
        &[
            p("idStore", Integer),
            p("idBlog", Integer),
            p("Slug", Str),
            p("lingua", Str),
        ],
    ),
    CallSpec::named("GetAutoreBlog", &[p("idStore", Integer), p("id", Integer), p("lingua", Str)]),
    CallSpec::named(
        "GetAutoreBlogBySlug",
        &[
            p("idStore", Integer),
            p("Slug", Str),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetPost",
        &[
            p("idStore", Integer),
            p("idBlog", Integer),
            p("idCat", Integer),
            p("idSottocat", Integer),
            p("idTag", Integer),
            p("idAutore", Integer),
            p("ID", Integer),
            p("slug", Str),
            p("lingua", Str),
            p("limit", Integer),
            p("Home", Integer),
            p("idProd", Integer),
        ],
    ),
    CallSpec::named(
        "GetSeo",
        &[
            p("idStore", Integer),
            p("IDprod", Integer),
            p("IDsesso", Integer),
            p("IDeta", Integer),
            p("IDcategoria", Integer),
            p("IDmarchio", Integer),
            p("IDcorr", Integer),
            p("IDtema", Integer),
            p("IDevento", Integer),
            p("IDnodo", Integer),
            p("idfamiglia", Integer),
            p("idgruppo", Integer),
            p("idsottofamiglia", Integer),
            p("lingua", Str),
            p("idSottoCategoria", Integer),
        ],
    ),
    CallSpec::named(
        "GetCategorieNews",
        &[
            p("idstore", Integer),
            p("IDCategoria", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetCategorieNewsBySlug",
        &[
            p("idstore", Integer),
            p("slug", Str),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetNews",
        &[
            p("idstore", Integer),
            p("IDNews", Integer),
            p("IDCategoria", Integer),
            p("limite", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetGuestbook",
        &[
            p("idStore", Integer),
            p("IDguestbook", Integer),
            p("limit", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "InsertGuestbook",
        &[
            p("idStore", Integer),
            p("nome", Str),
            p("email", Str),
            p("messaggio", Str),
            p("ip", Str),
        ],
    ),
    CallSpec::named("GetUtente", &[p("idutente", Integer), p("IDStore", Integer)]),
    CallSpec::named("GetUtenteByEmail", &[p("email", Str), p("idStore", Integer)]),
    CallSpec::named("GetUtenteByHash", &[p("hash", Str), p("IdStore", Integer)]),
    CallSpec::named("GetUtenteByPartitaIva", &[p("piva", Str), p("idStore", Integer)]),
    CallSpec::named("TryLogin", &[p("email", Str), p("password", Str), p("idStore", Integer)]),
    CallSpec::named(
        "TryLoginExt",
        &[
            p("email", Str),
            p("password", Str),
            p("tipoutente", Integer),
            p("idStore", Integer),
        ],
    ),
    CallSpec::named("TryLoginGuest", &[p("email", Str), p("IdStore", Integer)]),
    CallSpec::named("CheckUser", &[p("email", Str), p("idStore", Integer)]),
    CallSpec::named(
        "CheckUserExt",
        &[
            p("email", Str),
            p("tipoutente", Integer),
            p("idStore", Integer),
        ],
    ),
    CallSpec::named(
        "Sethashutente",
        &[
            p("idutente", Integer),
            p("Hash", Str),
            p("datacreazione", DateTime),
            p("datascadenza", DateTime),
        ],
    ),
    CallSpec::named("ID_ReceiveFile", &[p("FileData", Binary), p("Extension", Str)]),
    CallSpec::named(
        "GetSottocategoriaBySlug",
        &[
            p("idStore", Integer),
            p("IDCategoria", Integer),
            p("Slug", Str),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetCategoriaBySesso",
        &[
            p("idStore", Integer),
            p("ID", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named("ID_SendFile", &[p("FileName", Str)]),
    CallSpec::named("GetCategoria", &[p("idStore", Integer), p("ID", Integer), p("lingua", Str)]),
    CallSpec::named("GetGuidaTaglia", &[p("IDprod", Integer), p("lingua", Str)]),
    CallSpec::named(
        "GetGuidaTagliaEta",
        &[
            p("idstore", Integer),
            p("IDprod", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named("GetCompoLavaggiunoar", &[p("Idprod", Integer), p("lingua", Str)]),
    CallSpec::named(
        "GetCategoriaByEvento",
        &[
            p("idStore", Integer),
            p("ID", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named("CheckUserExist", &[p("email", Str), p("idStore", Integer)]),
    CallSpec::named(
        "InsertUtente",
        &[
            p("idStore", Integer),
            p("azienda", Str),
            p("nome", Str),
            p("cognome", Str),
            p("email", Str),
            p("password", Str),
            p("nazione", Str),
            p("indirizzo", Str),
            p("civico", Str),
            p("cap", Str),
            p("citta", Str),
            p("provincia", Str),
            p("telefono", Str),
            p("ragionesociale", Str),
            p("piva", Str),
            p("codfisc", Str),
            p("codfiscazienda", Str),
            p("personariferimento", Str),
            p("emailriferimento", Str),
            p("tipo", Integer),
            p("idtestalistini", Integer),
            p("causaleiva", Integer),
            p("causalepagamenti", Integer),
            p("attivo", Integer),
            p("idStorePreferito", Integer),
            p("codicePrime", Str),
            p("fidelity", Str),
            p("Lingua", Str),
            p("TipoAffiliazione", Str),
            p("tipoaccount", Integer),
            p("riceviemaildocumento", Integer),
            p("cellulare", Str),
            p("fax", Str),
            p("notachiusura", Str),
            p("SDI", Str),
            p("PEC", Str),
        ],
    ),
    CallSpec::named(
        "UpdateUtente",
        &[
            p("idStore", Integer),
            p("azienda", Str),
            p("nome", Str),
            p("cognome", Str),
            p("email", Str),
            p("password", Str),
            p("nazione", Str),
            p("indirizzo", Str),
            p("civico", Str),
            p("cap", Str),
            p("citta", Str),
            p("provincia", Str),
            p("telefono", Str),
            p("ragionesociale", Str),
            p("piva", Str),
            p("codfisc", Str),
            p("codfiscazienda", Str),
            p("personariferimento", Str),
            p("emailriferimento", Str),
            p("idtestalistini", Integer),
            p("causaleiva", Integer),
            p("causalepagamenti", Integer),
            p("id", Integer),
            p("idStorePreferito", Integer),
            p("codicePrime", Str),
            p("fidelity", Str),
            p("TipoAffiliazione", Str),
            p("cellulare", Str),
            p("fax", Str),
            p("notachiusura", Str),
            p("SDI", Str),
            p("PEC", Str),
        ],
    ),
    CallSpec::named(
        "UpdateUtenteInfoAgg",
        &[
            p("id", Integer),
            p("latitudine", Str),
            p("longitudine", Str),
            p("sitoweb", Str),
            p("flagcustom1", Integer),
            p("flagcustom2", Integer),
            p("flagcustom3", Integer),
            p("flagcustom4", Integer),
            p("flagcustom5", Integer),
            p("idRegione", Integer),
            p("codiceAgente", Integer),
            p("idvaluta", Integer),
            p("documentoDefault", Str),
            p("stampaPreferita", Integer),
            p("dataprimologin", DateTime),
        ],
    ),
    CallSpec::named("Crypt", &[p("pass", Str), p("Chiave", Str)]),
    CallSpec::named("SetResetPwd", &[p("email", Str), p("hash", Str), p("idStore", Integer)]),
    CallSpec::named(
        "SetResetPwdExt",
        &[
            p("email", Str),
            p("hash", Str),
            p("tipoutente", Integer),
            p("idStore", Integer),
        ],
    ),
    CallSpec::named("ResetPwd", &[p("hash", Str), p("nuovapassword", Str)]),
    CallSpec::named(
        "ResetPwdExt",
        &[
            p("hash", Str),
            p("nuovapassword", Str),
            p("tipoutente", Integer),
        ],
    ),
    CallSpec::named("AttivaUtente", &[p("idutente", Integer)]),
    CallSpec::named("DisattivaUtente", &[p("idutente", Integer)]),
    CallSpec::named(
        "GetDestinazione",
        &[
            p("idStore", Integer),
            p("iddest", Integer),
            p("idutente", Integer),
            p("idpudo", Str),
        ],
    ),
    CallSpec::named(
        "InsertDestinazione",
        &[
            p("idStore", Integer),
            p("IDUtente", Integer),
            p("desc1", Str),
            p("desc2", Str),
            p("indirizzo", Str),
            p("civico", Str),
            p("cap", Str),
            p("citta", Str),
            p("provincia", Str),
            p("nazione", Str),
            p("IdStorePreferito", Integer),
            p("Tipodestinazione", Integer),
            p("Citofono", Str),
            p("Interno", Str),
            p("Scala", Str),
            p("SDI", Str),
            p("PEC", Str),
            p("telefono1", Str),
            p("telefono2", Str),
            p("idpudo", Str),
        ],
    ),
    CallSpec::named(
        "UpdateDestinazione",
        &[
            p("idStore", Integer),
            p("idutente", Integer),
            p("destinazione", Integer),
            p("desc1", Str),
            p("desc2", Str),
            p("indirizzo", Str),
            p("civico", Str),
            p("cap", Str),
            p("citta", Str),
            p("provincia", Str),
            p("nazione", Str),
            p("IdStorePreferito", Integer),
            p("Citofono", Str),
            p("Interno", Str),
            p("Scala", Str),
            p("SDI", Str),
            p("PEC", Str),
            p("telefono1", Str),
            p("telefono2", Str),
            p("idpudo", Str),
        ],
    ),
    CallSpec::named("GetInfo", &[p("idutente", Integer), p("gruppo", Integer), p("chiave", Str)]),
    CallSpec::named(
        "InsertInfo",
        &[
            p("idutente", Integer),
            p("idgruppo", Integer),
            p("chiave", Str),
            p("valore", Str),
            p("canUpdate", Integer),
        ],
    ),
    CallSpec::named("GetInfoGruppo", &[p("idutente", Integer), p("idgruppo", Integer)]),
    CallSpec::named("GetInfoGruppoBySlug", &[p("idutente", Integer), p("sluggruppo", Str)]),
    CallSpec::named("InsertInfoGruppo", &[p("idutente", Integer), p("nome", Str)]),
    CallSpec::named(
        "UpdateInfoGruppo",
        &[
            p("idutente", Integer),
            p("idgruppo", Integer),
            p("nome", Str),
        ],
    ),
    CallSpec::named(
        "GetUtentiByInfo",
        &[
            p("idStore", Integer),
            p("chiave", Str),
            p("valore", Str),
        ],
    ),
    CallSpec::named(
        "GetUtenti",
        &[
            p("idStore", Integer),
            p("idutente", Integer),
            p("TipoUtente", Integer),
            p("codNazione", Str),
        ],
    ),
    CallSpec::named(
        "GetUtentiByUtente",
        &[
            p("idStore", Integer),
            p("idutente", Integer),
            p("TipoUtente", Integer),
            p("codNazione", Str),
            p("idutenteCollegato", Integer),
        ],
    ),
    CallSpec::named(
        "GetPuntiVendita",
        &[
            p("idStore", Integer),
            p("id", Integer),
            p("TipoUtente", Integer),
            p("codNazione", Str),
            p("puntoVendita", Integer),
            p("clickCollect", Integer),
            p("monoMarca", Integer),
            p("Provincia", Str),
            p("Citta", Str),
            p("Cap", Str),
            p("IdCategoria", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetPuntiVenditaByCodice",
        &[
            p("idStore", Integer),
            p("codice", Str),
            p("TipoUtente", Integer),
            p("codNazione", Str),
        ],
    ),
    CallSpec::named(
        "GetPuntiVenditaByNegozio",
        &[
            p("idStore", Integer),
            p("codiceNegozio", Str),
            p("TipoUtente", Integer),
            p("codNazione", Str),
        ],
    ),
    CallSpec::named(
        "GetPuntiVenditaByAgente",
        &[
            p("idStore", Integer),
            p("agente", Integer),
            p("TipoUtente", Integer),
            p("codNazione", Str),
        ],
    ),
    CallSpec::named("GetNoteUtente", &[p("idutente", Integer)]),
    CallSpec::named(
        "InsertCalendario",
        &[
            p("idStore", Integer),
            p("idUtenti", Integer),
            p("giornoSettimana", Integer),
            p("oraInizio", DateTime),
            p("oraFine", DateTime),
            p("indiceTurno", Integer),
            p("dataEccezione", DateTime),
            p("chiuso", Integer),
            p("nota", Str),
        ],
    ),
    CallSpec::named(
        "InsertRecensioneSogg",
        &[
            p("soggetto", Integer),
            p("nominativo", Str),
            p("testo", Str),
            p("voto", Integer),
            p("data", DateTime),
            p("abilitato", Integer),
            p("email", Str),
            p("titolo", Str),
            p("idCliente", Integer),
            p("idTestataDocumento", Integer),
        ],
    ),
    CallSpec::named(
        "GetRecensioneSoggetto",
        &[
            p("idStore", Integer),
            p("idSoggetto", Integer),
            p("idRecensione", Integer),
            p("idCliente", Integer),
            p("idTestataDocumento", Integer),
        ],
    ),
    CallSpec::named(
        "GetCategorieSoggetto",
        &[
            p("idStore", Integer),
            p("idCategoria", Integer),
            p("idSoggetto", Integer),
            p("slugCatgoria", Str),
        ],
    ),
    CallSpec::named(
        "InsertCategorieSoggettoUtente",
        &[
            p("idSoggetto", Integer),
            p("idcategoria", Integer),
            p("Priorita", Integer),
        ],
    ),
    CallSpec::named(
        "UpdateCategorieSoggettoUtente",
        &[
            p("idSoggetto", Integer),
            p("idcategoria", Integer),
            p("Priorita", Integer),
        ],
    ),
    CallSpec::named(
        "DeleteCategoriaSoggettoUtente",
        &[
            p("idSoggetto", Integer),
            p("idcategoria", Integer),
        ],
    ),
    CallSpec::named("GetUtenteByAgente", &[p("agente", Integer), p("IdStore", Integer)]),
    CallSpec::named(
        "InsertLogAzioneUtente",
        &[
            p("idutente", Integer),
            p("idazione", Integer),
            p("data", DateTime),
            p("cap", Str),
            p("lat", Str),
            p("lon", Str),
            p("ip", Str),
            p("ua", Str),
            p("nazione", Str),
            p("citta", Str),
            p("ref1", Str),
            p("ref2", Str),
            p("ref3", Str),
            p("geocoded", Integer),
        ],
    ),
    CallSpec::named("GetUtentiPermessi", &[p("idUtente", Integer)]),
    CallSpec::named(
        "GetPrezziUtente",
        &[
            p("idStore", Integer),
            p("idUtente", Integer),
            p("idListino", Integer),
            p("IdProdList", Str),
            p("idMarchio", Integer),
        ],
    ),
    CallSpec::named("GetSoggettiEmailPostVendita", &[p("idStore", Integer)]),
    CallSpec::named("UtenteDOAction", &[p("id", Integer)]),
    CallSpec::named(
        "UpdateTipoAccount",
        &[
            p("id", Integer),
            p("tipoaccount", Integer),
            p("IdStore", Integer),
        ],
    ),
    CallSpec::named(
        "UpdateUtenteValoriCustom",
        &[
            p("id", Integer),
            p("custom1", Str),
            p("custom2", Str),
            p("custom3", Str),
            p("custom4", Str),
            p("custom5", Str),
            p("idStore", Integer),
        ],
    ),
    CallSpec::named("GetUtentiByAgente", &[p("codAgente", Integer), p("idStore", Integer)]),
    CallSpec::named(
        "UpdateUtenteInfoAgg2",
        &[
            p("id", Integer),
            p("latitudine", Str),
            p("longitudine", Str),
            p("sitoweb", Str),
            p("flagcustom1", Integer),
            p("flagcustom2", Integer),
            p("flagcustom3", Integer),
            p("flagcustom4", Integer),
            p("flagcustom5", Integer),
            p("idRegione", Integer),
            p("codiceAgente", Integer),
            p("idvaluta", Integer),
            p("documentoDefault", Str),
            p("stampaPreferita", Integer),
            p("ImpMinOrdine", Double),
            p("EtdDeadLine", Double),
            p("EtdDeadLine2", Double),
            p("DistMassima", Double),
            p("Informazioni", Str),
            p("Dettagli", Str),
        ],
    ),
    CallSpec::named(
        "SpedisciOrdineContabEcomm3",
        &[
            p("NumeroDoc", Integer),
            p("DataDoc", DateTime),
            p("Tracking", Str),
            p("numeroContabile", Str),
            p("dataContabile", Str),
        ],
    ),
    CallSpec::named("AutorizzaResoEcomm3", &[p("bcReso", Str)]),
    CallSpec::named(
        "ImpostaOrdineEvasoEcomm3",
        &[
            p("IdOrdineExtOld", Integer),
            p("IdOrdineExtNew", Integer),
        ],
    ),
    CallSpec::named("EvadiOrdineEcomm3", &[p("NumeroDoc", Integer), p("DataDoc", DateTime)]),
    CallSpec::named("EvadiOrdineEcomm3Old", &[p("NumeroDoc", Integer), p("DataDoc", DateTime)]),
    CallSpec::named("GetMenuEta", &[p("idStore", Integer), p("Lingua", Str)]),
    CallSpec::named("GetMenuMarchi", &[p("idStore", Integer), p("Lingua", Str)]),
    CallSpec::named("GetMotivazioni", &[p("idStore", Integer)]),
    CallSpec::named(
        "InsertReso",
        &[
            p("idStore", Integer),
            p("idTestataDocumento", Integer),
            p("ragioneSociale", Str),
            p("indirizzo", Str),
            p("cap", Str),
            p("localita", Str),
            p("provincia", Str),
            p("nazione", Str),
            p("referente", Str),
            p("telefono", Str),
            p("dataOraRitiro", DateTime),
            p("email", Str),
            p("cellulare", Str),
            p("iban", Str),
            p("Note", Str),
            p("Orario", Str),
        ],
    ),
    CallSpec::named(
        "InsertRigaReso",
        &[
            p("idStore", Integer),
            p("idReso", Integer),
            p("qtaResa", Double),
            p("codiceMotivo", Str),
            p("idTestataOrdine", Integer),
            p("rigaOrdine", Integer),
            p("nota", Str),
            p("CausaleReso", Integer),
        ],
    ),
    CallSpec::named("ConfermaReso", &[p("idStore", Integer), p("idReso", Integer)]),
    CallSpec::named(
        "GetResi",
        &[
            p("idStore", Integer),
            p("idUtente", Integer),
            p("idReso", Integer),
        ],
    ),
    CallSpec::named(
        "GetPuntiVenditaProd",
        &[
            p("idStore", Integer),
            p("id", Integer),
            p("TipoUtente", Integer),
            p("codNazione", Str),
            p("puntoVendita", Integer),
            p("clickCollect", Integer),
            p("monoMarca", Integer),
        ],
    ),
    CallSpec::named(
        "GetPuntiVenditaProdByProd",
        &[
            p("idStore", Integer),
            p("idProd", Integer),
            p("TipoUtente", Integer),
            p("codNazione", Str),
        ],
    ),
    CallSpec::named(
        "InsertProvaAcquisto",
        &[
            p("idStore", Integer),
            p("IDUtente", Integer),
            p("codice", Str),
        ],
    ),
    CallSpec::named("CheckProvaAcquisto", &[p("idStore", Integer), p("codice", Str)]),
    CallSpec::named(
        "GetEventiByUtente",
        &[
            p("idStore", Integer),
            p("idUtente", Integer),
            p("idCategoria", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetCategoriaByUtente",
        &[
            p("idStore", Integer),
            p("idUtente", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetSottoCategoriaByUtente",
        &[
            p("idStore", Integer),
            p("idcategoria", Integer),
            p("idUtente", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetOfferte",
        &[
            p("idstore", Integer),
            p("id", Integer),
            p("idutente", Integer),
            p("slug", Str),
            p("lingua", Str),
            p("priorita", Integer),
            p("idcampagna", Str),
        ],
    ),
    CallSpec::named("GetRigheOfferta", &[p("idOfferta", Integer)]),
    CallSpec::named(
        "GetParametriPromozioni",
        &[
            p("idStore", Integer),
            p("tipoPromo", Str),
            p("lingua", Str),
        ],
    ),
    CallSpec::named("GetParametriPromozione", &[p("idStore", Integer), p("idPromozione", Integer)]),
    CallSpec::named(
        "GetCategoriaByTema",
        &[
            p("idStore", Integer),
            p("ID", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetCategoriaBySlug",
        &[
            p("idStore", Integer),
            p("Slug", Str),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetSottocategoria",
        &[
            p("idStore", Integer),
            p("IDCategoria", Integer),
            p("ID", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetGuidaTagliaByParam",
        &[
            p("IDprod", Integer),
            p("lingua", Str),
            p("byCategoria", Integer),
            p("byEta", Integer),
            p("bySesso", Integer),
            p("byMarchio", Integer),
        ],
    ),
    CallSpec::positional("IMDBOffset"),
    CallSpec::named("GetFidelity", &[p("codice", Str)]),
    CallSpec::named("AssociaFidelity", &[p("Idfidelity", Integer), p("Idutente", Integer)]),
    CallSpec::named("AttivaFidelity", &[p("Idutente", Integer)]),
    CallSpec::named("GetNotificaStockByEmail", &[p("email", Str), p("idstore", Integer)]),
    CallSpec::named("GetUtentiDisattivati", &[p("data", DateTime)]),
    CallSpec::named(
        "GetCategoriaTree",
        &[
            p("idStore", Integer),
            p("ID", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetCategoriaTreeBySlug",
        &[
            p("idStore", Integer),
            p("slug", Str),
            p("livello", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetFotoCategoriaTree",
        &[
            p("idStore", Integer),
            p("ID", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetCategoriaByStagione",
        &[
            p("idStore", Integer),
            p("idStagione", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named("GetEvento", &[p("idStore", Integer), p("ID", Integer), p("lingua", Str)]),
    CallSpec::named("GetEventoBySlug", &[p("idStore", Integer), p("Slug", Str), p("lingua", Str)]),
    CallSpec::named(
        "GetEventoBySesso",
        &[
            p("idStore", Integer),
            p("ID", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetEventoByCategoria",
        &[
            p("idStore", Integer),
            p("ID", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named("GetTema", &[p("idStore", Integer), p("ID", Integer), p("lingua", Str)]),
    CallSpec::named("GetTemaBySlug", &[p("idStore", Integer), p("Slug", Str), p("lingua", Str)]),
    CallSpec::named("GetSesso", &[p("idStore", Integer), p("ID", Integer), p("lingua", Str)]),
    CallSpec::named("GetSessoBySlug", &[p("idStore", Integer), p("Slug", Str), p("lingua", Str)]),
    CallSpec::named("GetEta", &[p("idStore", Integer), p("ID", Integer), p("lingua", Str)]),
    CallSpec::named("GetEtaBySlug", &[p("idStore", Integer), p("Slug", Str), p("lingua", Str)]),
    CallSpec::named("GetEtaBySesso", &[p("idStore", Integer), p("ID", Integer), p("lingua", Str)]),
    CallSpec::named("GetMarchio", &[p("idStore", Integer), p("ID", Integer), p("lingua", Str)]),
    CallSpec::named("GetMarchioBySlug", &[p("idStore", Integer), p("Slug", Str), p("lingua", Str)]),
    CallSpec::named(
        "Getmarchiobyutente",
        &[
            p("ID", Integer),
            p("IDutente", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetMarchioBySesso",
        &[
            p("idStore", Integer),
            p("Slug", Str),
            p("lingua", Str),
            p("idSesso", Integer),
        ],
    ),
    CallSpec::named("GetCorr", &[p("idStore", Integer), p("ID", Integer), p("lingua", Str)]),
    CallSpec::named("GetCorrBySlug", &[p("idStore", Integer), p("Slug", Str), p("lingua", Str)]),
    CallSpec::named("GetCorrBySesso", &[p("idStore", Integer), p("ID", Integer), p("lingua", Str)]),
    CallSpec::named(
        "GetCorrByRegole",
        &[
            p("idStore", Integer),
            p("IDprod", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named("GetCorrTriggersByIdCorr", &[p("IDCorr", Integer)]),
    CallSpec::named("GetCorrRegoleByIdCorr", &[p("IDCorr", Integer)]),
    CallSpec::named("GetStagione", &[p("idStore", Integer), p("ID", Integer), p("lingua", Str)]),
    CallSpec::named("GetNazione", &[p("codice", Str), p("lingua", Str)]),
    CallSpec::named("GetNazioneSped", &[p("idStore", Integer), p("codice", Str), p("lingua", Str)]),
    CallSpec::named("GetRegione", &[p("codNazione", Str), p("id", Integer), p("lingua", Str)]),
    CallSpec::named(
        "GetProvincia",
        &[
            p("codNazione", Str),
            p("idRegione", Integer),
            p("id", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named("GetComune", &[p("idProvincia", Integer), p("id", Integer), p("lingua", Str)]),
    CallSpec::named("GetRecensione", &[p("codiceProdotto", Str), p("idRecensione", Integer)]),
    CallSpec::named(
        "InsertRecensione",
        &[
            p("codiceProdotto", Str),
            p("nominativo", Str),
            p("testo", Str),
            p("voto", Integer),
            p("data", DateTime),
            p("abilitato", Integer),
            p("email", Str),
            p("titolo", Str),
        ],
    ),
    CallSpec::named("GetFasceSconto", &[p("idlistino", Integer)]),
    CallSpec::named(
        "GetCategorieSoggetti",
        &[
            p("idStore", Integer),
            p("idCategoria", Integer),
            p("slugCatgoria", Str),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetProdotto",
        &[
            p("idStore", Integer),
            p("ID", Integer),
            p("lingua", Str),
            p("Utente", Integer),
        ],
    ),
    CallSpec::named(
        "GetProdottoBySlug",
        &[
            p("idStore", Integer),
            p("slug", Str),
            p("lingua", Str),
            p("Utente", Integer),
        ],
    ),
    CallSpec::named(
        "CheckDisponbilita",
        &[
            p("idStore", Integer),
            p("IDProdotto", Integer),
            p("IDValVar1", Integer),
            p("IDValVar2", Integer),
            p("IDValVar3", Integer),
            p("qtaRichiesta", Integer),
        ],
    ),
    CallSpec::named(
        "InsertNotificaStockProd",
        &[
            p("idStore", Integer),
            p("IDprod", Integer),
            p("var1", Integer),
            p("var2", Integer),
            p("var3", Integer),
            p("Email", Str),
            p("CodiceLingua", Str),
            p("Body", Str),
            p("url", Str),
            p("quantita", Double),
        ],
    ),
    CallSpec::named(
        "GetPagamentiPreferenzialiByUtente",
        &[
            p("idStore", Integer),
            p("idUtente", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetMinPrezzoEcommerce",
        &[
            p("IDProd", Integer),
            p("IDVar1", Integer),
            p("IDVar2", Integer),
            p("IDVar3", Integer),
            p("idStore", Integer),
            p("IDListino", Integer),
            p("idUtente", Integer),
        ],
    ),
    CallSpec::named("GetComposizioni", &[p("idCompo", Integer), p("lingua", Str)]),
    CallSpec::named(
        "GetGuidaTaglieExt",
        &[
            p("idcategoria", Integer),
            p("idsottocat", Integer),
            p("ideta", Integer),
            p("idsesso", Integer),
            p("idmarchio", Integer),
            p("idfamiglia", Integer),
            p("idgruppo", Integer),
            p("idsottofam", Integer),
            p("idsottogruppo", Integer),
            p("idtipovar", Integer),
            p("idtema", Integer),
            p("idevento", Integer),
            p("idcatalbero", Integer),
            p("idstore", Integer),
        ],
    ),
    CallSpec::named(
        "GetGuidaTaglieTrad",
        &[
            p("lingua", Str),
            p("idcategoria", Integer),
            p("idsottocat", Integer),
            p("ideta", Integer),
            p("idsesso", Integer),
            p("idmarchio", Integer),
            p("idfamiglia", Integer),
            p("idgruppo", Integer),
            p("idsottofam", Integer),
            p("idsottogruppo", Integer),
            p("idtipovar", Integer),
            p("idtema", Integer),
            p("idevento", Integer),
            p("idcatalbero", Integer),
            p("idstore", Integer),
        ],
    ),
    CallSpec::named(
        "GetGiacenzeDettagliate",
        &[
            p("idProd", Integer),
            p("idvar1", Integer),
            p("idvar2", Integer),
            p("idvar3", Integer),
        ],
    ),
    CallSpec::named(
        "GetDisponbilita",
        &[
            p("idStore", Integer),
            p("IDProdotto", Integer),
            p("IDValVar1", Integer),
            p("IDValVar2", Integer),
            p("IDValVar3", Integer),
        ],
    ),
    CallSpec::named(
        "GetProdottiPiuAcquistati",
        &[
            p("Utente", Integer),
            p("righe", Integer),
            p("treshold", Integer),
            p("IdStore", Integer),
        ],
    ),
    CallSpec::named(
        "GetTestataByDataModifica",
        &[
            p("idStore", Integer),
            p("idUtente", Integer),
            p("dataDa", DateTime),
            p("dataA", DateTime),
            p("importoMinimo", Double),
            p("incEvasi", Integer),
            p("dataInizioHash", DateTime),
            p("dataFineHash", DateTime),
            p("ricercaperhash", Integer),
            p("Tiporec", Str),
        ],
    ),
    CallSpec::named(
        "GetLastDocsUtentiWeb",
        &[
            p("idStore", Integer),
            p("dataDa", DateTime),
            p("dataA", DateTime),
            p("Tiporec", Str),
            p("email", Str),
        ],
    ),
    CallSpec::named("getRigheAppartateByIDDoc", &[p("idDoc", Integer)]),
    CallSpec::named("setRigaAppartata", &[p("idDoc", Integer), p("riga", Integer)]),
    CallSpec::positional("getOCAppartati"),
    CallSpec::named(
        "GetComunicazioneBySlug",
        &[
            p("slug", Str),
            p("idstore", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetComunicazioniByUser",
        &[
            p("idUser", Integer),
            p("idstore", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named("GetVettore", &[p("ID", Integer)]),
    CallSpec::positional("GetNotificaStock"),
    CallSpec::named(
        "GetVarValori",
        &[
            p("idVariante", Integer),
            p("idTipoVariante", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named(
        "GetCataloghi",
        &[
            p("ID", Integer),
            p("slug", Str),
            p("idStore", Integer),
            p("idStagione", Integer),
            p("idMarchio", Integer),
            p("idCategoria", Integer),
            p("lingua", Str),
        ],
    ),
    CallSpec::named("GetAgente", &[p("codAgente", Integer), p("IdStore", Integer)]),
    CallSpec::named("InsertUtentiStore", &[p("idUtente", Integer), p("idStore", Integer)]),
    CallSpec::named("GetUtentiStore", &[p("idUtente", Integer)]),
    CallSpec::named("DeleteNotificaStock", &[p("IdNotifica", Integer)]),
];
